//! Profile, skills, and values for the about page and the feed sidebar

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub blurb: &'static str,
    pub bio: &'static [&'static str],
    pub now: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "Michelle Lu",
    tagline: "Computer Science Student at University of Waterloo",
    blurb: "Just a girl keeping up with the world. Passionate about problem-solving and making a real-world impact.",
    bio: &[
        "Hello! I'm Michelle, a Computer Science student at the University of Waterloo. I'm passionate about problem-solving and technology that makes a difference.",
        "currently: nerding out",
        "Outside of everything tech related, I like the outdoors, reading, music, and writing.",
    ],
    now: "Currently learning about agentic AI and improving my knowledge of machine learning models. Always open to cool opportunities and connections!",
    email: "m235lu@uwaterloo.ca",
    github: "https://github.com/albertred",
    linkedin: "https://linkedin.com/in/michellelu",
};

/// Skill categories, in display order
pub static SKILLS: &[(&str, &[&str])] = &[
    (
        "Programming Languages",
        &["C++", "C", "Python", "JavaScript", "HTML/CSS"],
    ),
    (
        "Frameworks & Libraries",
        &[
            "React",
            "Angular",
            "Node.js",
            "Express.js",
            ".NET Core",
            "PyTorch",
            "TailwindCSS",
        ],
    ),
    (
        "Tools & Technologies",
        &["Git", "Linux", "Playwright", "Insomnia"],
    ),
    ("Databases", &["SQL", "MongoDB Atlas"]),
    ("Cloud & Deployment", &["Vercel", "Azure"]),
];

pub static VALUES: &[(&str, &str)] = &[
    (
        "Continuous Learning",
        "In the very fast-paced world of technology, I love learning and keeping up with new advancements",
    ),
    ("Creativity", "I like to have fun while building software"),
    (
        "Collaboration",
        "I always appreciate diverse perspectives and believe that the best solutions come from effective teamwork",
    ),
    (
        "Impact-Driven",
        "I want to build technology that leads to a sustainable future",
    ),
];
