//! Blog posts
//!
//! TODO: source these from markdown files under a content/ directory once
//! there are more than a handful of posts.

use super::BlogPost;

pub static POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "building-spotify-mcp",
        title: "Building a Spotify MCP Server for Claude",
        date: "2025-01-15",
        read_time: "5 min read",
        excerpt: "How I built a Model Context Protocol server to integrate Spotify with Claude Desktop for natural language music control.",
        sections: &[
            (
                "Introduction",
                "With all the buzz around MCP, I wanted to try building a server of my own and point it at something I use daily: Spotify.",
            ),
            (
                "Getting Started",
                "The Model Context Protocol defines how an assistant discovers and calls tools. A minimal server declares its tools, handles JSON-RPC calls, and does the real work against the Spotify Web API.",
            ),
            (
                "Implementation",
                "The interesting parts were the OAuth 2.0 PKCE flow and mapping conversational requests onto API calls - playlist creation, recommendations, and playback control all hang off a small command-parsing layer.",
            ),
        ],
    },
    BlogPost {
        slug: "wlp4-compiler-journey",
        title: "Building a C++ Compiler from Scratch",
        date: "2024-12-10",
        read_time: "8 min read",
        excerpt: "My experience implementing a full compiler for WLP4, including lexical analysis, parsing, semantic analysis, and code generation.",
        sections: &[
            (
                "The Challenge",
                "WLP4 is a teaching subset of C with functions and pointers. Over a term I built the whole pipeline down to MIPS assembly.",
            ),
            (
                "Lexical Analysis",
                "Breaking the source code into tokens with a maximal-munch scanner, and learning why error reporting is half the job.",
            ),
            (
                "Parsing",
                "Building a parse tree from the grammar, then a second pass for types. The moment the first valid program compiled end to end was worth every segfault.",
            ),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posts_dated_newest_first() {
        // dates are ISO strings, so lexicographic order works
        for pair in POSTS.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }
}
