//! Markdown → HTML

use pulldown_cmark::{html, Options, Parser};

/// Render markdown source to an HTML fragment.
///
/// CommonMark plus tables, strikethrough, task lists and heading attributes.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

    let parser = Parser::new_ext(source, options);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// First level-one heading of a markdown document, if any.
pub fn first_heading(source: &str) -> Option<String> {
    source
        .lines()
        .map(str::trim_start)
        .find_map(|line| line.strip_prefix("# "))
        .map(|heading| heading.trim().to_string())
        .filter(|heading| !heading.is_empty())
}
