//! Sidebar disclosure state and render view
//!
//! Each section is either collapsed or expanded. The resolver only seeds the
//! initial state (its expanded section opens, the rest stay collapsed); after
//! that, sections change exclusively through `toggle`.

use super::menu::MenuModel;
use super::resolver::NavigationState;
use super::slug::href_for;

/// Visibility of one section's entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disclosure {
    Collapsed,
    Expanded,
}

impl Disclosure {
    pub fn toggled(self) -> Self {
        match self {
            Disclosure::Collapsed => Disclosure::Expanded,
            Disclosure::Expanded => Disclosure::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == Disclosure::Expanded
    }
}

/// Per-section disclosure, in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarState {
    sections: Vec<(String, Disclosure)>,
}

impl SidebarState {
    /// Initial state for a render: only the resolved section is expanded.
    pub fn seed(model: &MenuModel, navigation: &NavigationState) -> Self {
        let sections = model
            .scan_order()
            .map(|section| {
                let disclosure = if navigation.is_expanded(&section.title) {
                    Disclosure::Expanded
                } else {
                    Disclosure::Collapsed
                };
                (section.title.clone(), disclosure)
            })
            .collect();
        Self { sections }
    }

    /// Flip one section. Returns the new state, or `None` for an unknown title.
    ///
    /// Titles are identity keys, so when two sections share a title only the
    /// first one is addressable here as well.
    pub fn toggle(&mut self, title: &str) -> Option<Disclosure> {
        let (_, disclosure) = self.sections.iter_mut().find(|(t, _)| t == title)?;
        *disclosure = disclosure.toggled();
        Some(*disclosure)
    }

    pub fn disclosure(&self, title: &str) -> Option<Disclosure> {
        self.sections.iter().find(|(t, _)| t == title).map(|(_, d)| *d)
    }

    pub fn is_expanded(&self, title: &str) -> bool {
        self.disclosure(title).is_some_and(Disclosure::is_expanded)
    }
}

/// One link in the rendered sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub title: String,
    /// Percent-encoded route of the entry's page.
    pub href: String,
    pub active: bool,
}

/// One section in the rendered sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub title: String,
    pub expanded: bool,
    pub entries: Vec<EntryView>,
}

/// Everything the sidebar template needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarView {
    /// Static sections.
    pub sections: Vec<SectionView>,
    /// The see-also section, rendered below a separator.
    pub see_also: SectionView,
}

impl SidebarView {
    pub fn build(model: &MenuModel, navigation: &NavigationState, state: &SidebarState) -> Self {
        let mut active_taken = false;
        let mut views: Vec<SectionView> = model
            .scan_order()
            .map(|section| {
                // Only the entry inside the resolved section is highlighted, so a
                // title shared across sections lights up once.
                let in_active_section = navigation.is_expanded(&section.title) && !active_taken;
                let entries = section
                    .entries
                    .iter()
                    .map(|entry| {
                        let active = in_active_section && navigation.is_active(entry);
                        EntryView {
                            title: entry.clone(),
                            href: href_for(entry),
                            active,
                        }
                    })
                    .collect();
                if in_active_section {
                    active_taken = true;
                }
                SectionView {
                    title: section.title.clone(),
                    expanded: state.is_expanded(&section.title),
                    entries,
                }
            })
            .collect();

        // scan_order always yields the see-also section last
        let see_also = views.pop().unwrap_or_else(|| SectionView {
            title: model.see_also_section().title.clone(),
            expanded: false,
            entries: Vec::new(),
        });

        Self { sections: views, see_also }
    }
}
