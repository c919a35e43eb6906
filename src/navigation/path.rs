//! Current request path as a list of segments

use std::borrow::Cow;

/// Path segments with the leading empty segment removed.
///
/// `/docs/welcome` → `["docs", "welcome"]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CurrentPath {
    segments: Vec<String>,
}

impl CurrentPath {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a URI path into decoded segments.
    ///
    /// Empty segments (trailing or doubled slashes) are dropped, a query
    /// string is ignored, and each segment is percent-decoded. A segment that
    /// does not decode to UTF-8 is kept verbatim.
    pub fn parse(uri_path: &str) -> Self {
        let path = uri_path.split(['?', '#']).next().unwrap_or_default();
        let segments = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match urlencoding::decode(segment) {
                Ok(Cow::Borrowed(s)) => s.to_string(),
                Ok(Cow::Owned(s)) => s,
                Err(_) => segment.to_string(),
            })
            .collect();
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Last segment, or `""` when the path stops at the section root.
    pub fn last_segment(&self) -> &str {
        if self.segments.len() < 2 {
            ""
        } else {
            self.segments.last().map(String::as_str).unwrap_or_default()
        }
    }

    /// True when there is no segment below the section root (`/docs`).
    pub fn is_section_root(&self) -> bool {
        self.segments.len() < 2
    }
}
