//! Render the whole portfolio as plain text or JSON
//!
//! Used by `folio export` and by the fallback path when no usable terminal
//! is available (the portfolio still gets shown, just not animated).

use std::fmt::Write;

use serde::Serialize;
use serde_json::Value;

use crate::content::{about, blog, experience, projects, Entry};

#[derive(Serialize)]
struct Portfolio {
    profile: &'static about::Profile,
    projects: &'static [Entry],
    experience: &'static [Entry],
    posts: &'static [crate::content::BlogPost],
}

fn portfolio() -> Portfolio {
    Portfolio {
        profile: &about::PROFILE,
        projects: projects::ENTRIES,
        experience: experience::ENTRIES,
        posts: blog::POSTS,
    }
}

/// Serialize every content table to pretty JSON
pub fn to_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&portfolio())
}

/// Parsed JSON value, for callers that want to inspect rather than print
pub fn to_json_value() -> serde_json::Result<Value> {
    serde_json::to_value(portfolio())
}

/// Render a resume-style plain-text version of the portfolio
pub fn to_text() -> String {
    let mut out = String::new();
    let profile = &about::PROFILE;

    let _ = writeln!(out, "{}", profile.name.to_uppercase());
    let _ = writeln!(out, "{}", profile.tagline);
    let _ = writeln!(out, "{} | {}", profile.email, profile.github);

    let _ = writeln!(out, "\nPROJECTS");
    for entry in projects::ENTRIES {
        write_entry(&mut out, entry);
    }

    let _ = writeln!(out, "\nEXPERIENCE");
    for entry in experience::ENTRIES {
        write_entry(&mut out, entry);
    }

    let _ = writeln!(out, "\nSKILLS");
    for (category, skills) in about::SKILLS {
        let _ = writeln!(out, "  {}: {}", category, skills.join(", "));
    }

    out
}

fn write_entry(out: &mut String, entry: &Entry) {
    match entry.org {
        Some(org) => {
            let _ = writeln!(out, "\n  {} - {} ({})", entry.title, org, entry.period);
        }
        None => {
            let _ = writeln!(out, "\n  {} ({})", entry.title, entry.period);
        }
    }
    for bullet in entry.bullets {
        let _ = writeln!(out, "    - {}", bullet);
    }
    if !entry.tech.is_empty() {
        let _ = writeln!(out, "    [{}]", entry.tech.join(", "));
    }
}
