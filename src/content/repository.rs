//! Content repositories
//!
//! The navigation core never touches the filesystem. It receives identifiers
//! from `ContentRepository::list`; the web layer reads one of them with
//! `source`. `FsContentRepository` backs both with a directory of `.md` files.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::SystemTime;
use thiserror::Error;
use tracing::{debug, warn};

/// File extension of content files.
pub const CONTENT_EXTENSION: &str = "md";

/// Error surfaced when a content file cannot be rendered.
#[derive(Debug, Error)]
pub enum ContentError {
    /// No content file exists for the identifier.
    #[error("content not found: {0}")]
    NotFound(String),
    /// The identifier would escape the content directory.
    #[error("invalid content identifier: {0:?}")]
    InvalidIdentifier(String),
    /// Any other I/O failure while reading the file.
    #[error("content I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Source of listable, renderable content.
pub trait ContentRepository: Send + Sync {
    /// Identifiers of all available content, in display order.
    ///
    /// Implementations degrade to an empty list on failure so the see-also
    /// section renders empty instead of failing the page.
    fn list(&self) -> Vec<String>;

    /// Raw markdown of one identifier.
    fn source(&self, identifier: &str) -> Result<String, ContentError>;

    /// Cheap summary of the stored content; changes whenever the content does.
    fn fingerprint(&self, identifier: &str) -> Result<ContentFingerprint, ContentError>;
}

/// Modification time and size of a content file.
///
/// Rendered pages are cached under this value, so an edit produces a new
/// cache key instead of serving the old body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentFingerprint {
    pub modified: Option<SystemTime>,
    pub len: u64,
}

/// Directory of markdown files; identifiers are file stems.
#[derive(Debug, Clone)]
pub struct FsContentRepository {
    root: PathBuf,
}

impl FsContentRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn file_for(&self, identifier: &str) -> Result<PathBuf, ContentError> {
        validate_identifier(identifier)?;
        Ok(self.root.join(format!("{}.{}", identifier, CONTENT_EXTENSION)))
    }

    fn read_listing(&self) -> io::Result<Vec<String>> {
        let mut identifiers = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(CONTENT_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                identifiers.push(stem.to_string());
            }
        }
        // read_dir order is platform-defined; sort for a stable sidebar
        identifiers.sort();
        Ok(identifiers)
    }
}

impl ContentRepository for FsContentRepository {
    fn list(&self) -> Vec<String> {
        match self.read_listing() {
            Ok(identifiers) => {
                debug!(root = %self.root.display(), count = identifiers.len(), "Listed content");
                identifiers
            }
            Err(error) => {
                warn!(
                    root = %self.root.display(),
                    error = %error,
                    "Failed to list content directory; see-also section will be empty"
                );
                Vec::new()
            }
        }
    }

    fn source(&self, identifier: &str) -> Result<String, ContentError> {
        let path = self.file_for(identifier)?;
        match fs::read_to_string(&path) {
            Ok(source) => Ok(source),
            Err(e) => Err(not_found_or_io(identifier, e)),
        }
    }

    fn fingerprint(&self, identifier: &str) -> Result<ContentFingerprint, ContentError> {
        let path = self.file_for(identifier)?;
        let metadata = fs::metadata(&path).map_err(|e| not_found_or_io(identifier, e))?;
        if !metadata.is_file() {
            return Err(ContentError::NotFound(identifier.to_string()));
        }
        Ok(ContentFingerprint {
            modified: metadata.modified().ok(),
            len: metadata.len(),
        })
    }
}

fn not_found_or_io(identifier: &str, error: io::Error) -> ContentError {
    if error.kind() == io::ErrorKind::NotFound {
        ContentError::NotFound(identifier.to_string())
    } else {
        ContentError::Io(error)
    }
}

/// Reject identifiers that are empty or could leave the content directory.
fn validate_identifier(identifier: &str) -> Result<(), ContentError> {
    let bad = identifier.is_empty()
        || identifier == "."
        || identifier.contains("..")
        || identifier.contains(['/', '\\', '\0']);
    if bad {
        Err(ContentError::InvalidIdentifier(identifier.to_string()))
    } else {
        Ok(())
    }
}
