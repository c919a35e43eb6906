// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::response::{Html, IntoResponse};

use crate::navigation::{SectionView, DOCS_BASE_PATH};
use crate::web::site_data::{self, FeatureBlock};

/// Render a template, falling back to the error text so a broken template
/// never takes the page down with a panic.
pub fn render_html<T: Template>(template: &T) -> Html<String> {
    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template error: {}", e);
        format!("Template error: {}", e)
    }))
}

// ============================================================================
// Home Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub title: String,
    pub description: &'static str,
    pub main_features: &'static [&'static str],
    pub features: &'static [FeatureBlock],
    pub under_development_note: &'static str,
    pub docs_href: &'static str,
}

pub async fn home_page() -> impl IntoResponse {
    let template = HomeTemplate {
        title: site_data::SITE_NAME.to_string(),
        description: site_data::DESCRIPTION,
        main_features: site_data::MAIN_FEATURES,
        features: site_data::FEATURES,
        under_development_note: site_data::UNDER_DEVELOPMENT_NOTE,
        docs_href: DOCS_BASE_PATH,
    };
    render_html(&template)
}

// ============================================================================
// Docs Pages
// ============================================================================

/// A sidebar section plus the link that toggles it.
#[derive(Debug, Clone)]
pub struct SidebarSectionLink {
    pub section: SectionView,
    pub toggle_href: String,
}

#[derive(Template)]
#[template(path = "pages/doc.html")]
pub struct DocTemplate {
    pub title: String,
    pub sections: Vec<SidebarSectionLink>,
    pub see_also: SidebarSectionLink,
    /// Rendered markdown; trusted because it comes from the site's own files.
    pub body: String,
}

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub title: String,
    pub sections: Vec<SidebarSectionLink>,
    pub see_also: SidebarSectionLink,
    pub requested: String,
}

// ============================================================================
// Error Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}
