//! ize documentation site
//!
//! Navigation core and server for the ize docs:
//! - `navigation/`: menu model, title ↔ slug normalization, path resolution,
//!   sidebar collapse/expand state
//! - `content/`: markdown content listing and rendering
//! - `config`: environment-driven site configuration
//! - `server` + `web/`: axum router, askama pages (feature `server`)
//!
//! The navigation core is pure and synchronous. Everything that touches the
//! filesystem sits behind `content::ContentRepository`.

pub mod config;
pub mod content;
pub mod navigation;

#[cfg(feature = "server")]
pub mod server;
#[cfg(feature = "server")]
pub mod web;

// Re-export commonly used types
pub use config::SiteConfig;
pub use content::{ContentError, ContentRepository, FsContentRepository};
pub use navigation::{
    resolve, slug_to_title, title_to_slug, CurrentPath, MenuModel, NavigationState, Section,
    SidebarState, SidebarView,
};

#[cfg(feature = "server")]
pub use server::{create_router, AppState};
