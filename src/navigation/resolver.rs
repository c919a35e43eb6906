//! Navigation state resolution
//!
//! Maps the current path onto the menu: which section renders expanded and
//! which entry is highlighted. Pure function of its inputs; a path that
//! matches nothing yields the empty state, which renders as an unhighlighted
//! menu.

use tracing::debug;

use super::menu::MenuModel;
use super::path::CurrentPath;
use super::slug::{slug_to_title, title_to_slug};

/// Which part of the menu an entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOrigin {
    /// One of the fixed sections.
    Static,
    /// The see-also section built from the content listing.
    SeeAlso,
}

/// Resolver output for one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub expanded_section: Option<String>,
    pub active_entry: Option<String>,
    pub origin: Option<EntryOrigin>,
}

impl NavigationState {
    fn matched(section: &str, entry: &str, origin: EntryOrigin) -> Self {
        Self {
            expanded_section: Some(section.to_string()),
            active_entry: Some(entry.to_string()),
            origin: Some(origin),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.active_entry.is_none()
    }

    pub fn is_active(&self, entry: &str) -> bool {
        self.active_entry.as_deref() == Some(entry)
    }

    pub fn is_expanded(&self, section: &str) -> bool {
        self.expanded_section.as_deref() == Some(section)
    }
}

/// Resolve the expanded section and active entry for `path`.
///
/// At the section root the landing entry (empty slug) is active. Elsewhere
/// the last segment is turned back into a title and matched by equality.
/// Sections are scanned static-first, then see-also; the first hit wins.
pub fn resolve(model: &MenuModel, path: &CurrentPath) -> NavigationState {
    let static_count = model.sections().len();
    let origin_of = |index: usize| {
        if index < static_count {
            EntryOrigin::Static
        } else {
            EntryOrigin::SeeAlso
        }
    };

    let state = if path.is_section_root() {
        model
            .scan_order()
            .enumerate()
            .find_map(|(index, section)| {
                section
                    .entries
                    .iter()
                    .find(|entry| title_to_slug(entry).is_empty())
                    .map(|entry| NavigationState::matched(&section.title, entry, origin_of(index)))
            })
            .unwrap_or_default()
    } else {
        let candidate = slug_to_title(path.last_segment());
        model
            .scan_order()
            .enumerate()
            .find(|(_, section)| section.contains(&candidate))
            .map(|(index, section)| NavigationState::matched(&section.title, &candidate, origin_of(index)))
            .unwrap_or_default()
    };

    debug!(
        path = ?path.segments(),
        expanded = ?state.expanded_section,
        active = ?state.active_entry,
        "Resolved navigation state"
    );
    state
}
