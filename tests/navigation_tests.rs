//! Navigation Integration Tests
//!
//! Exercises the public navigation API end to end: menu construction,
//! slug normalization, path parsing and resolution.

use ize_docs::navigation::{
    resolve, slug_to_title, title_to_slug, CurrentPath, EntryOrigin, MenuModel, NavigationState,
    Section, SidebarState, SidebarView, LANDING_TITLE, SEE_ALSO_TITLE,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Two-section menu used throughout.
fn fixture_menu() -> MenuModel {
    MenuModel::new(
        vec![
            Section::new("getting started", ["welcome", "installation"]),
            Section::new("guides", ["deploying ECS app"]),
        ],
        SEE_ALSO_TITLE,
    )
}

// =========================================================================
// Title normalization
// =========================================================================

#[test]
fn test_slug_examples() {
    assert_eq!(title_to_slug("getting started"), "getting-started");
    assert_eq!(slug_to_title("getting-started"), "getting started");
    assert_eq!(title_to_slug("welcome"), "");
}

#[test]
fn test_round_trip_over_generated_titles() {
    let words = ["deploy", "ECS", "app", "v2", "Terraform", "3"];
    for a in words {
        for b in words {
            for title in [a.to_string(), format!("{} {}", a, b), format!("{} {} {}", b, a, b)] {
                assert_eq!(slug_to_title(&title_to_slug(&title)), title);
            }
        }
    }
    assert_eq!(slug_to_title(&title_to_slug(LANDING_TITLE)), LANDING_TITLE);
}

// =========================================================================
// Resolution
// =========================================================================

#[test]
fn test_docs_root_selects_welcome() {
    let menu = fixture_menu().with_see_also(&[]);
    let state = resolve(&menu, &CurrentPath::parse("/docs"));
    assert_eq!(state.active_entry.as_deref(), Some("welcome"));
    assert_eq!(state.expanded_section.as_deref(), Some("getting started"));
}

#[test]
fn test_installation_path() {
    let menu = fixture_menu().with_see_also(&[]);
    let state = resolve(&menu, &CurrentPath::new(["docs", "installation"]));
    assert_eq!(state.expanded_section.as_deref(), Some("getting started"));
    assert_eq!(state.active_entry.as_deref(), Some("installation"));
}

#[test]
fn test_unknown_path_yields_nothing_and_still_renders() {
    let menu = fixture_menu().with_see_also(&strings(&["doc1"]));
    let state = resolve(&menu, &CurrentPath::new(["docs", "not-a-real-page"]));
    assert_eq!(state, NavigationState::default());

    let sidebar = SidebarView::build(&menu, &state, &SidebarState::seed(&menu, &state));
    let highlighted = sidebar
        .sections
        .iter()
        .chain(std::iter::once(&sidebar.see_also))
        .flat_map(|s| s.entries.iter())
        .filter(|e| e.active)
        .count();
    assert_eq!(highlighted, 0);
    assert!(sidebar.sections.iter().all(|s| !s.expanded));
}

#[test]
fn test_see_also_listing() {
    let menu = fixture_menu();
    assert!(menu.see_also(&[]).entries.is_empty());
    assert_eq!(menu.see_also(&strings(&["doc1", "doc2"])).entries, strings(&["doc1", "doc2"]));
}

#[test]
fn test_see_also_entry_resolves_after_static_sections() {
    let menu = fixture_menu().with_see_also(&strings(&["doc1", "doc2"]));
    let state = resolve(&menu, &CurrentPath::parse("/docs/doc2"));
    assert_eq!(state.expanded_section.as_deref(), Some(SEE_ALSO_TITLE));
    assert_eq!(state.active_entry.as_deref(), Some("doc2"));
    assert_eq!(state.origin, Some(EntryOrigin::SeeAlso));
}

#[test]
fn test_resolve_twice_is_equal() {
    let menu = fixture_menu().with_see_also(&strings(&["doc1"]));
    for raw in ["/docs", "/docs/installation", "/docs/doc1", "/docs/nope", "/"] {
        let path = CurrentPath::parse(raw);
        assert_eq!(resolve(&menu, &path), resolve(&menu, &path), "path {raw}");
    }
}

#[test]
fn test_shared_title_first_static_section_wins() {
    let menu = MenuModel::new(
        vec![
            Section::new("getting started", ["welcome", "overview"]),
            Section::new("guides", ["overview"]),
        ],
        SEE_ALSO_TITLE,
    )
    .with_see_also(&strings(&["overview"]));

    let state = resolve(&menu, &CurrentPath::parse("/docs/overview"));
    assert_eq!(state.expanded_section.as_deref(), Some("getting started"));
    assert_eq!(state.origin, Some(EntryOrigin::Static));

    // reordering the sections flips the winner
    let reordered = MenuModel::new(
        vec![Section::new("guides", ["overview"]), Section::new("getting started", ["overview"])],
        SEE_ALSO_TITLE,
    );
    let state = resolve(&reordered, &CurrentPath::parse("/docs/overview"));
    assert_eq!(state.expanded_section.as_deref(), Some("guides"));
}

#[test]
fn test_see_also_shadowed_by_static_entry() {
    let menu = fixture_menu().with_see_also(&strings(&["installation"]));
    let state = resolve(&menu, &CurrentPath::parse("/docs/installation"));
    assert_eq!(state.expanded_section.as_deref(), Some("getting started"));
}

#[test]
fn test_hyphenated_identifier_is_not_matched() {
    let menu = fixture_menu().with_see_also(&strings(&["release-notes"]));
    let state = resolve(&menu, &CurrentPath::parse("/docs/release-notes"));
    assert!(state.is_empty());
}

#[test]
fn test_percent_encoded_segment_matches() {
    let menu = fixture_menu().with_see_also(&strings(&["doc 1"]));
    let state = resolve(&menu, &CurrentPath::parse("/docs/doc%201"));
    assert_eq!(state.active_entry.as_deref(), Some("doc 1"));
}

#[test]
fn test_default_menu_resolves_every_static_entry() {
    let menu = MenuModel::ize_default().with_see_also(&[]);
    for section in menu.sections() {
        for entry in &section.entries {
            let route = ize_docs::navigation::route_for(entry);
            let state = resolve(&menu, &CurrentPath::parse(&route));
            assert_eq!(state.active_entry.as_deref(), Some(entry.as_str()), "route {route}");
            assert_eq!(state.expanded_section.as_deref(), Some(section.title.as_str()));
        }
    }
}
