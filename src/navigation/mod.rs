//! Docs navigation
//!
//! - `menu`: static sections plus the see-also section
//! - `slug`: title ↔ URL segment normalization
//! - `path`: request path as segments
//! - `resolver`: current path → expanded section and active entry
//! - `sidebar`: collapse/expand state machine and render view

pub mod menu;
pub mod path;
pub mod resolver;
pub mod sidebar;
pub mod slug;

pub use menu::{MenuError, MenuModel, Section, SEE_ALSO_TITLE};
pub use path::CurrentPath;
pub use resolver::{resolve, EntryOrigin, NavigationState};
pub use sidebar::{Disclosure, EntryView, SectionView, SidebarState, SidebarView};
pub use slug::{href_for, path_name, route_for, slug_to_title, title_to_slug, DOCS_BASE_PATH, LANDING_TITLE};
