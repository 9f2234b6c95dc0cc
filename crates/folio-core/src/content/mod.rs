//! Content model - the typed records every view renders
//!
//! All data is static and ships in the binary. Feed entries (projects and
//! work experience) share the `Entry` shape; projects additionally have a
//! detail record with long-form sections.

pub mod about;
pub mod blog;
pub mod experience;
pub mod projects;

use serde::Serialize;
use tracing::debug;

use crate::error::ContentError;

/// Which feed section an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Project,
    Experience,
}

/// External links attached to an entry
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Links {
    pub github: Option<&'static str>,
    pub live: Option<&'static str>,
}

impl Links {
    pub const NONE: Links = Links {
        github: None,
        live: None,
    };

    /// The link the `o` key should open, preferring the live site
    pub fn primary(&self) -> Option<&'static str> {
        self.live.or(self.github)
    }
}

/// One card in the feed - a project or a work experience
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub slug: &'static str,
    pub kind: EntryKind,
    pub title: &'static str,
    pub org: Option<&'static str>,
    pub period: &'static str,
    pub summary: &'static str,
    pub bullets: &'static [&'static str],
    pub tech: &'static [&'static str],
    pub links: Links,
}

/// Long-form detail page behind a project card
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    pub slug: &'static str,
    pub status: &'static str,
    pub featured: bool,
    pub awards: &'static [&'static str],
    /// (heading, body) paragraphs; an empty heading renders as lead text
    pub sections: &'static [(&'static str, &'static str)],
}

/// A blog post with its rendered sections
#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub excerpt: &'static str,
    pub sections: &'static [(&'static str, &'static str)],
}

/// Look up a project entry and its detail page by slug
pub fn project(slug: &str) -> Result<(&'static Entry, &'static ProjectDetail), ContentError> {
    let entry = projects::ENTRIES
        .iter()
        .find(|e| e.slug == slug)
        .ok_or_else(|| ContentError::UnknownProject(slug.to_string()))?;
    let detail = projects::DETAILS
        .iter()
        .find(|d| d.slug == slug)
        .ok_or_else(|| {
            debug!(slug, "project entry has no detail record");
            ContentError::UnknownProject(slug.to_string())
        })?;
    Ok((entry, detail))
}

/// Look up a blog post by slug
pub fn post(slug: &str) -> Result<&'static BlogPost, ContentError> {
    blog::POSTS
        .iter()
        .find(|p| p.slug == slug)
        .ok_or_else(|| ContentError::UnknownPost(slug.to_string()))
}
