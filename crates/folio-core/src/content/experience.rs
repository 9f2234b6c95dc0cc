//! Work experience records

use super::{Entry, EntryKind, Links};

pub static ENTRIES: &[Entry] = &[
    Entry {
        slug: "rocket-coop",
        kind: EntryKind::Experience,
        title: "Software Development Co-op",
        org: Some("Rocket"),
        period: "May 2025 - Aug 2025",
        summary: "Developed features for banker workflow management application",
        bullets: &[
            "Developed features for a banker workflow management application using C#, WPF, and SQL, as well as enhancing and testing .NET Core APIs with Insomnia and MSTest to support UI and backend application functionality",
            "Took ownership of user stories from design through code implementation and delivering high-quality, maintainable solutions that support key business processes in a complex business domain",
            "Led bi-weekly team retrospectives and participating in code reviews to support agile development practices",
        ],
        tech: &["C#", "WPF", "SQL", ".NET Core", "Insomnia", "MSTest"],
        links: Links::NONE,
    },
    Entry {
        slug: "uw-researcher",
        kind: EntryKind::Experience,
        title: "Undergraduate Researcher",
        org: Some("University of Waterloo"),
        period: "Sep 2024 - Feb 2025",
        summary: "Investigated activation function effects on stability in predictive coding networks",
        bullets: &[
            "Investigated activation function effects on stability and convergence in predictive coding networks, applying theoretical understanding to experimental design and statistical analysis in PyTorch",
            "Produced literature reviews and research proposals, demonstrating ability to translate theory into actionable items",
            "Implemented regression models and neural networks to solve real-world prediction challenges, quickly mastering new machine learning techniques and frameworks in a dynamic research environment",
        ],
        tech: &["PyTorch", "Python"],
        links: Links::NONE,
    },
    Entry {
        slug: "ops-intern",
        kind: EntryKind::Experience,
        title: "Software Development Intern",
        org: Some("Ontario Public Service"),
        period: "May 2024 - Aug 2024",
        summary: "Automated regression test suite reducing testing time by 80%",
        bullets: &[
            "Automated regression test suite using Playwright Python on the BPS Secure project, reducing testing time by 80%",
            "Resolved defects in an Angular application to enhance performance and user experience",
            "Enabled language support by enhancing the test suite with bilingual UI testing capabilities and ensured efficiency by managing user data through Python scripts",
        ],
        tech: &["Playwright Python", "Angular", "Python"],
        links: Links::NONE,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_have_orgs() {
        for entry in ENTRIES {
            assert_eq!(entry.kind, EntryKind::Experience);
            assert!(entry.org.is_some(), "{} missing org", entry.slug);
        }
    }
}
