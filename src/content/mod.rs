//! Docs content
//!
//! Listing and rendering of authored markdown pages, kept behind the
//! `ContentRepository` trait so navigation code stays filesystem-free.

pub mod markdown;
pub mod repository;

pub use markdown::{first_heading, render_markdown};
pub use repository::{
    ContentError, ContentFingerprint, ContentRepository, FsContentRepository, CONTENT_EXTENSION,
};
