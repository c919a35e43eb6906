// Docs page handler: path → navigation state → sidebar + content

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::pages::{render_html, DocTemplate, NotFoundTemplate, SidebarSectionLink};
use crate::content::{first_heading, render_markdown, ContentError};
use crate::navigation::{
    path_name, resolve, CurrentPath, EntryOrigin, NavigationState, SectionView,
    SidebarState, SidebarView,
};
use crate::server::{AppError, AppState, ContentScope, PageKey, RenderedPage};

/// Query key carrying a section title to flip.
pub const TOGGLE_PARAM: &str = "toggle";

/// Body shown for a menu entry whose content file does not exist yet.
const MISSING_CONTENT_HTML: &str = "<p>This page has no content yet.</p>";

pub async fn docs_page(State(state): State<AppState>, uri: Uri) -> Result<Response, AppError> {
    let docs = state.docs.clone();
    let identifiers = blocking(move || docs.list()).await?;

    let model = state.menu.with_see_also(&identifiers);
    let path = CurrentPath::parse(uri.path());
    let navigation = resolve(&model, &path);

    let toggles = toggles_from_query(uri.query());
    let mut sidebar_state = SidebarState::seed(&model, &navigation);
    for title in &toggles {
        sidebar_state.toggle(title);
    }
    let view = SidebarView::build(&model, &navigation, &sidebar_state);
    let (sections, see_also) = sidebar_links(view, &toggles);

    match load_page(&state, &navigation, &path, &identifiers).await? {
        Some(page) => {
            let template = DocTemplate {
                title: page.title.clone(),
                sections,
                see_also,
                body: page.html.clone(),
            };
            Ok(render_html(&template).into_response())
        }
        None => {
            tracing::debug!("No docs page for {}", uri.path());
            let template = NotFoundTemplate {
                title: "not found".to_string(),
                sections,
                see_also,
                requested: uri.path().to_string(),
            };
            Ok((StatusCode::NOT_FOUND, render_html(&template)).into_response())
        }
    }
}

/// Find and render the content behind the current page.
///
/// Matched static entries read from the pages repository and fall back to a
/// placeholder body when their file is missing. Matched see-also entries read
/// from the docs repository. Unmatched paths try the raw slug in the docs
/// repository, which covers identifiers the hyphen round trip cannot recover.
/// Docs are only served while `listing` contains them, and every hit is keyed
/// on the file's current fingerprint.
async fn load_page(
    state: &AppState,
    navigation: &NavigationState,
    path: &CurrentPath,
    listing: &[String],
) -> Result<Option<Arc<RenderedPage>>, AppError> {
    let (scope, identifier, fallback_title) =
        match (navigation.origin, navigation.active_entry.as_deref()) {
            (Some(EntryOrigin::Static), Some(entry)) => {
                (ContentScope::Pages, path_name(entry), entry.to_string())
            }
            (Some(EntryOrigin::SeeAlso), Some(entry)) => {
                (ContentScope::Docs, entry.to_string(), entry.to_string())
            }
            _ if path.is_section_root() => return Ok(None),
            _ => {
                let slug = path.last_segment().to_string();
                (ContentScope::Docs, slug.clone(), slug)
            }
        };

    if scope == ContentScope::Docs && !listing.contains(&identifier) {
        return Ok(None);
    }

    let repository = match scope {
        ContentScope::Pages => state.pages.clone(),
        ContentScope::Docs => state.docs.clone(),
    };

    let (stat_repository, lookup) = (repository.clone(), identifier.clone());
    let fingerprint = match blocking(move || stat_repository.fingerprint(&lookup)).await? {
        Ok(fingerprint) => fingerprint,
        Err(error) => return missing_page(scope, &identifier, fallback_title, error),
    };

    let key = PageKey {
        scope,
        identifier: identifier.clone(),
        fingerprint,
    };
    if let Some(hit) = state.cache.get(&key).await {
        return Ok(Some(hit));
    }

    let lookup = identifier.clone();
    let markdown = match blocking(move || repository.source(&lookup)).await? {
        Ok(markdown) => markdown,
        // removed between the stat and the read
        Err(error) => return missing_page(scope, &identifier, fallback_title, error),
    };

    let page = Arc::new(RenderedPage {
        title: first_heading(&markdown).unwrap_or(fallback_title),
        html: render_markdown(&markdown),
    });
    state.cache.insert(key, page.clone()).await;
    Ok(Some(page))
}

/// Outcome for content that could not be read. Placeholders are never
/// cached, so a file added later shows up on the next request.
fn missing_page(
    scope: ContentScope,
    identifier: &str,
    title: String,
    error: ContentError,
) -> Result<Option<Arc<RenderedPage>>, AppError> {
    match error {
        ContentError::NotFound(_) if scope == ContentScope::Pages => {
            tracing::warn!(identifier = %identifier, "Menu entry has no content file");
            Ok(Some(Arc::new(RenderedPage {
                title,
                html: MISSING_CONTENT_HTML.to_string(),
            })))
        }
        ContentError::NotFound(_) | ContentError::InvalidIdentifier(_) => Ok(None),
        ContentError::Io(_) => Err(error.into()),
    }
}

/// Run filesystem work off the async runtime.
async fn blocking<T, F>(task: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| AppError::Internal(format!("Content task failed: {}", e)))
}

/// Section titles listed under `toggle` in the query string, in order.
pub fn toggles_from_query(query: Option<&str>) -> Vec<String> {
    let Some(query) = query else {
        return Vec::new();
    };
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .filter(|(key, _)| *key == TOGGLE_PARAM)
        .filter_map(|(_, value)| {
            let value = value.replace('+', " ");
            urlencoding::decode(&value).ok().map(|v| v.into_owned())
        })
        .filter(|value| !value.is_empty())
        .collect()
}

/// Query string that flips `title` on top of the current toggles.
///
/// Toggling twice is the identity, so an already-present title is removed
/// instead of appended.
pub fn toggle_href(current: &[String], title: &str) -> String {
    let mut next: Vec<&str> = current.iter().map(String::as_str).collect();
    if let Some(pos) = next.iter().position(|t| *t == title) {
        next.remove(pos);
    } else {
        next.push(title);
    }
    let query: Vec<String> = next
        .iter()
        .map(|t| format!("{}={}", TOGGLE_PARAM, urlencoding::encode(t)))
        .collect();
    format!("?{}", query.join("&"))
}

fn sidebar_links(view: SidebarView, toggles: &[String]) -> (Vec<SidebarSectionLink>, SidebarSectionLink) {
    let link = |section: SectionView| SidebarSectionLink {
        toggle_href: toggle_href(toggles, &section.title),
        section,
    };
    let sections = view.sections.into_iter().map(&link).collect();
    (sections, link(view.see_also))
}
