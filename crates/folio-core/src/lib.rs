//! folio-core - content records and export for the folio portfolio
//!
//! Everything the UI renders lives here as static data: project and
//! experience entries for the feed, per-project detail pages, the about
//! profile, and blog posts. The crate also renders the whole portfolio as
//! plain text or JSON for the `export` subcommand and the no-terminal
//! fallback path.

pub mod content;
pub mod error;
pub mod export;

pub use content::{Entry, EntryKind, Links};
pub use error::ContentError;
