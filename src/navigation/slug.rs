//! Title ↔ slug normalization
//!
//! A leaf title maps to its URL segment by replacing spaces with hyphens.
//! The landing entry ("welcome") routes to the docs root, so its slug is
//! empty. The inverse replaces hyphens with spaces, which is lossy for titles
//! that contain hyphens: "deploy-now" and "deploy now" share the slug
//! "deploy-now" and only the latter is recovered.

/// Title of the entry served at the docs root.
pub const LANDING_TITLE: &str = "welcome";

/// Base path every docs route hangs from.
pub const DOCS_BASE_PATH: &str = "/docs/";

/// Hyphenated form of a title, before the landing substitution.
///
/// Static page content files are named after this form
/// (`deploying ECS app` → `deploying-ECS-app.md`).
pub fn path_name(title: &str) -> String {
    title.replace(' ', "-")
}

/// URL segment for a title. The landing title maps to the empty string.
pub fn title_to_slug(title: &str) -> String {
    let slug = path_name(title);
    if slug == LANDING_TITLE {
        String::new()
    } else {
        slug
    }
}

/// Title recovered from a URL segment. The empty segment is the landing title.
pub fn slug_to_title(slug: &str) -> String {
    if slug.is_empty() {
        LANDING_TITLE.to_string()
    } else {
        slug.replace('-', " ")
    }
}

/// Absolute route of an entry's page.
pub fn route_for(title: &str) -> String {
    format!("{}{}", DOCS_BASE_PATH, title_to_slug(title))
}

/// `route_for` with the slug percent-encoded, safe to drop into an HTML
/// attribute. `CurrentPath::parse` decodes it back.
pub fn href_for(title: &str) -> String {
    format!("{}{}", DOCS_BASE_PATH, urlencoding::encode(&title_to_slug(title)))
}
