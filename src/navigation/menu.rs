//! Menu model for the docs sidebar
//!
//! A menu is an ordered list of static sections followed by one "see also"
//! section whose entries come from the content listing. Titles double as
//! identity keys: the resolver matches pages to entries by title equality,
//! so duplicate titles inside a section are rejected at load time.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use super::slug::LANDING_TITLE;

/// Title of the dynamic section built from the content listing.
pub const SEE_ALSO_TITLE: &str = "see also";

/// Errors raised while loading or validating a menu definition.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The menu file could not be read.
    #[error("menu I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The menu file is not valid JSON for a menu.
    #[error("menu parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// A section or entry has an empty title.
    #[error("empty title in section {section:?}")]
    EmptyTitle { section: String },
    /// The same entry title appears twice inside one section.
    #[error("duplicate entry {entry:?} in section {section:?}")]
    DuplicateEntry { section: String, entry: String },
}

/// A named group of entries in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Section {
    pub title: String,
    /// Leaf titles in render order.
    #[serde(default)]
    pub entries: Vec<String>,
}

impl Section {
    pub fn new<I, S>(title: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.iter().any(|e| e == entry)
    }
}

/// The whole navigation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuModel {
    sections: Vec<Section>,
    see_also: Section,
}

/// On-disk shape of a menu file.
#[derive(Debug, Deserialize)]
struct MenuFile {
    sections: Vec<Section>,
    #[serde(default = "default_see_also_title")]
    see_also_title: String,
}

fn default_see_also_title() -> String {
    SEE_ALSO_TITLE.to_string()
}

impl MenuModel {
    /// Build a menu from static sections. The see-also section starts empty.
    pub fn new(sections: Vec<Section>, see_also_title: impl Into<String>) -> Self {
        Self {
            sections,
            see_also: Section::new(see_also_title, Vec::<String>::new()),
        }
    }

    /// The menu shipped with the ize docs site.
    pub fn ize_default() -> Self {
        Self::new(
            vec![
                Section::new("getting started", [LANDING_TITLE, "installation"]),
                Section::new("guides", ["deploying ECS app", "deploying serverless app"]),
            ],
            SEE_ALSO_TITLE,
        )
    }

    /// Parse and validate a menu from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, MenuError> {
        let file: MenuFile = serde_json::from_str(json)?;
        let model = Self::new(file.sections, file.see_also_title);
        model.validate()?;
        Ok(model)
    }

    /// Load and validate a menu from a JSON file.
    pub fn load(path: &Path) -> Result<Self, MenuError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Static sections in fixed order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Build the see-also section from a content listing, keeping its order.
    pub fn see_also(&self, content_identifiers: &[String]) -> Section {
        Section::new(self.see_also.title.clone(), content_identifiers.iter().cloned())
    }

    /// The see-also section currently attached to this model.
    pub fn see_also_section(&self) -> &Section {
        &self.see_also
    }

    /// Per-render copy of the menu with the see-also entries replaced.
    pub fn with_see_also(&self, content_identifiers: &[String]) -> Self {
        Self {
            sections: self.sections.clone(),
            see_also: self.see_also(content_identifiers),
        }
    }

    /// Static sections followed by the see-also section.
    ///
    /// Every consumer that needs "first match wins" semantics walks this
    /// order, so the resolver and the sidebar always agree.
    pub fn scan_order(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().chain(std::iter::once(&self.see_also))
    }

    /// Check the title-as-identity contract.
    ///
    /// Duplicates inside one section and empty titles are errors. Duplicates
    /// across sections and hyphenated titles are legal but only logged: the
    /// first one in scan order wins, and a hyphenated title never matches
    /// its own slug.
    pub fn validate(&self) -> Result<(), MenuError> {
        let mut seen_anywhere: HashSet<&str> = HashSet::new();

        for section in self.scan_order() {
            if section.title.trim().is_empty() {
                return Err(MenuError::EmptyTitle { section: section.title.clone() });
            }

            let mut seen_here: HashSet<&str> = HashSet::new();
            for entry in &section.entries {
                if entry.trim().is_empty() {
                    return Err(MenuError::EmptyTitle { section: section.title.clone() });
                }
                if !seen_here.insert(entry.as_str()) {
                    return Err(MenuError::DuplicateEntry {
                        section: section.title.clone(),
                        entry: entry.clone(),
                    });
                }
                if !seen_anywhere.insert(entry.as_str()) {
                    warn!(
                        section = %section.title,
                        entry = %entry,
                        "Entry title appears in more than one section; the first section wins"
                    );
                }
                if entry.contains('-') {
                    warn!(
                        section = %section.title,
                        entry = %entry,
                        "Entry title contains a hyphen and cannot be matched from its slug"
                    );
                }
            }
        }

        Ok(())
    }
}

impl Default for MenuModel {
    fn default() -> Self {
        Self::ize_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_see_also_empty_listing() {
        let menu = MenuModel::ize_default();
        let section = menu.see_also(&[]);
        assert_eq!(section.title, SEE_ALSO_TITLE);
        assert!(section.entries.is_empty());
    }

    #[test]
    fn test_see_also_preserves_order() {
        let menu = MenuModel::ize_default();
        let section = menu.see_also(&ids(&["doc2", "doc1"]));
        assert_eq!(section.entries, ids(&["doc2", "doc1"]));
    }

    #[test]
    fn test_with_see_also_leaves_original_untouched() {
        let menu = MenuModel::ize_default();
        let per_render = menu.with_see_also(&ids(&["doc1"]));
        assert!(menu.see_also_section().entries.is_empty());
        assert_eq!(per_render.see_also_section().entries, ids(&["doc1"]));
        assert_eq!(per_render.sections(), menu.sections());
    }

    #[test]
    fn test_scan_order_puts_see_also_last() {
        let menu = MenuModel::ize_default().with_see_also(&ids(&["doc1"]));
        let titles: Vec<&str> = menu.scan_order().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["getting started", "guides", "see also"]);
    }

    #[test]
    fn test_default_menu_is_valid() {
        assert!(MenuModel::ize_default().validate().is_ok());
    }

    #[test]
    fn test_from_json_defaults_see_also_title() {
        let menu = MenuModel::from_json_str(
            r#"{"sections":[{"title":"start","entries":["welcome","setup"]}]}"#,
        )
        .unwrap();
        assert_eq!(menu.sections().len(), 1);
        assert_eq!(menu.see_also_section().title, SEE_ALSO_TITLE);
    }

    #[test]
    fn test_from_json_rejects_duplicate_entry() {
        let err = MenuModel::from_json_str(
            r#"{"sections":[{"title":"start","entries":["setup","setup"]}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, MenuError::DuplicateEntry { ref entry, .. } if entry == "setup"));
    }

    #[test]
    fn test_from_json_rejects_empty_title() {
        let err = MenuModel::from_json_str(r#"{"sections":[{"title":" ","entries":[]}]}"#)
            .unwrap_err();
        assert!(matches!(err, MenuError::EmptyTitle { .. }));
    }

    #[test]
    fn test_cross_section_duplicates_are_allowed() {
        let menu = MenuModel::new(
            vec![Section::new("a", ["shared"]), Section::new("b", ["shared"])],
            SEE_ALSO_TITLE,
        );
        assert!(menu.validate().is_ok());
    }

    #[test]
    fn test_duplicate_in_see_also_is_rejected() {
        let menu = MenuModel::ize_default().with_see_also(&ids(&["doc1", "doc1"]));
        assert!(matches!(menu.validate(), Err(MenuError::DuplicateEntry { .. })));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = MenuModel::load(Path::new("/nonexistent/menu.json")).unwrap_err();
        assert!(matches!(err, MenuError::Io(_)));
    }
}
