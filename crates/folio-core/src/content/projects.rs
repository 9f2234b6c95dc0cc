//! Project records - feed entries plus detail pages

use super::{Entry, EntryKind, Links, ProjectDetail};

pub static ENTRIES: &[Entry] = &[
    Entry {
        slug: "spotify-mcp",
        kind: EntryKind::Project,
        title: "Spotify MCP",
        org: None,
        period: "Aug 2025 - Present",
        summary: "Building a custom Model Context Protocol server to connect Claude Desktop with Spotify API",
        bullets: &[
            "Building a custom Model Context Protocol server to connect with Claude Desktop with the Spotify API",
            "Enabling playlist creation, song recommendations, and personalized music management through natural language commands while deepening understanding of API integration and Agentic AI",
        ],
        tech: &["TypeScript", "Node.js", "Spotify API"],
        links: Links {
            github: Some("https://github.com/albertred"),
            live: None,
        },
    },
    Entry {
        slug: "wlp4-compiler",
        kind: EntryKind::Project,
        title: "WLP4 Compiler",
        org: None,
        period: "Jan 2025 - Apr 2025",
        summary: "Built a full C++ compiler for WLP4, a C subset including functions and pointers",
        bullets: &[
            "Built a full C++ compiler for WLP4, a C subset including functions and pointers, translating to MIPS assembly",
            "Implemented key compiler stages: scanning, parsing, semantic analysis, and code generation",
        ],
        tech: &["C++"],
        links: Links {
            github: Some("https://github.com/albertred"),
            live: None,
        },
    },
    Entry {
        slug: "mingo",
        kind: EntryKind::Project,
        title: "Mingo, Hack the North",
        org: None,
        period: "Sep 2024",
        summary: "Web application to enhance attendee experiences at networking events",
        bullets: &[
            "Developed a web application in collaboration with 3 teammates to enhance attendee experiences at networking events with a user-friendly UI for exploring event venues created using React and TailwindCSS",
            "Integrated Cohere's API to generate AI summaries of verbal conversations, enhancing recall and accessibility",
        ],
        tech: &["Cohere API", "React", "TailwindCSS"],
        links: Links {
            github: Some("https://github.com/albertred"),
            live: None,
        },
    },
    Entry {
        slug: "fridgefriend",
        kind: EntryKind::Project,
        title: "FridgeFriend, Technova Best UI/UX Winner",
        org: None,
        period: "Sep 2024",
        summary: "Web application that recommends recipes based on food images",
        bullets: &[
            "Built a web application with Streamlit Python that recommends recipes to users based on input of food images, created with image detection using YOLOv5 and a vectorizer trained recipe dataset from Kaggle",
            "Implemented user authentication with PropelAuth and stored user recipe data using MongoDB Atlas",
        ],
        tech: &["Python", "PropelAuth", "MongoDB Atlas"],
        links: Links {
            github: Some("https://github.com/albertred"),
            live: None,
        },
    },
    Entry {
        slug: "payroll-software",
        kind: EntryKind::Project,
        title: "Payroll Management Software",
        org: None,
        period: "Jun 2023 - Aug 2023",
        summary: "Payroll management system automating extraction, calculation, and PDF generation",
        bullets: &[
            "Co-developed a payroll management system using Python and Django, automating extraction, calculation, and PDF generation of paystubs from Excel data",
            "Leveraged Pandas and Openpyxl for data processing and PyPDF2 for document creation",
        ],
        tech: &["Python", "Django"],
        links: Links {
            github: Some("https://github.com/albertred"),
            live: None,
        },
    },
];

pub static DETAILS: &[ProjectDetail] = &[
    ProjectDetail {
        slug: "spotify-mcp",
        status: "In Progress",
        featured: true,
        awards: &[],
        sections: &[
            (
                "",
                "With all the buzz around MCP, I wanted to try building one myself. I have always wanted to explore how AI can make personalized music recommendations and help manage playlists, so this was the perfect opportunity to create a Spotify MCP Server.",
            ),
            (
                "The Challenge",
                "Modern AI assistants excel at understanding natural language but struggle with real-time integration of external services like music streaming platforms. Users often need to switch between their AI chat interface and music applications, breaking the flow of conversation and productivity.",
            ),
            (
                "Technical Implementation",
                "The MCP server is built using TypeScript and Node.js, leveraging the Model Context Protocol specification to create a seamless bridge between Claude Desktop and Spotify's Web API: an OAuth 2.0 PKCE flow for secure authentication, WebSocket connections for live music state synchronization, command parsing to translate conversational requests into Spotify API calls, and robust handling of API rate limits and network issues.",
            ),
            (
                "Impact & Learning",
                "This project has allowed me to learn about using the Spotify API and OAuth 2.0 authentication flows, and I'm learning about how AI is becoming a more useful tool. It also explores the future of human-computer interaction, where natural language becomes the primary interface for complex application control.",
            ),
        ],
    },
    ProjectDetail {
        slug: "wlp4-compiler",
        status: "Completed",
        featured: true,
        awards: &[],
        sections: &[
            (
                "The Challenge",
                "WLP4 is a C subset including functions and pointers. The compiler translates it to MIPS assembly through the classic pipeline, built from scratch over a term.",
            ),
            (
                "Lexical Analysis",
                "Breaking the source down into tokens with a maximal-munch scanner.",
            ),
            (
                "Parsing",
                "Building a parse tree bottom-up from the WLP4 grammar, then decorating it with types during semantic analysis.",
            ),
            (
                "Code Generation",
                "Walking the decorated tree to emit MIPS assembly, with a simple convention-driven register and stack discipline.",
            ),
        ],
    },
    ProjectDetail {
        slug: "mingo",
        status: "Completed",
        featured: true,
        awards: &[],
        sections: &[
            (
                "",
                "Built with three teammates at Hack the North to make networking events less awkward: a venue explorer with a friendly UI and AI conversation summaries.",
            ),
            (
                "How it works",
                "React and TailwindCSS on the front end; Cohere's API generates summaries of verbal conversations so attendees can recall who they met and what they talked about.",
            ),
        ],
    },
    ProjectDetail {
        slug: "fridgefriend",
        status: "Completed",
        featured: true,
        awards: &["Best UI/UX - Technova 2024"],
        sections: &[
            (
                "",
                "Point a camera at your fridge and get recipes. Built with Streamlit, YOLOv5 image detection, and a vectorizer trained on a Kaggle recipe dataset.",
            ),
            (
                "Stack",
                "User authentication with PropelAuth; user recipe data stored in MongoDB Atlas.",
            ),
        ],
    },
    ProjectDetail {
        slug: "payroll-software",
        status: "Completed",
        featured: false,
        awards: &[],
        sections: &[
            (
                "",
                "A payroll management system co-developed in Python and Django, automating extraction, calculation, and PDF generation of paystubs from Excel data using Pandas, Openpyxl, and PyPDF2.",
            ),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_projects() {
        assert!(ENTRIES.iter().all(|e| e.kind == EntryKind::Project));
        assert_eq!(ENTRIES.len(), 5);
    }

    #[test]
    fn test_award_winner_flagged() {
        let detail = DETAILS.iter().find(|d| d.slug == "fridgefriend").unwrap();
        assert!(!detail.awards.is_empty());
        assert!(detail.featured);
    }
}
