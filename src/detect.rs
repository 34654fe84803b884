//! Template content detection and upload validation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Kind of stored template content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// HTML markup
    #[default]
    Html,
    /// JSON element model
    Json,
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Html => f.write_str("html"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Accepted upload extensions (lowercase, without the dot).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["html", "json", "txt"];

/// Classify content by its first non-whitespace character.
///
/// Anything that does not look like JSON is treated as HTML.
pub fn detect_content_kind(content: &str) -> ContentKind {
    let trimmed = content.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        ContentKind::Json
    } else {
        ContentKind::Html
    }
}

/// Validate uploaded content.
///
/// # Returns
/// * `Ok(ContentKind::Json)` if the content parses as JSON
/// * `Ok(ContentKind::Html)` if the content starts with a tag and contains a closing tag
/// * `Err(Error::InvalidContent)` otherwise
pub fn validate_content(content: &str) -> Result<ContentKind> {
    let trimmed = content.trim();
    match detect_content_kind(trimmed) {
        ContentKind::Json => {
            serde_json::from_str::<serde_json::Value>(trimmed).map_err(|_| {
                Error::InvalidContent("Invalid JSON content. Please check your syntax.".into())
            })?;
            Ok(ContentKind::Json)
        }
        ContentKind::Html if trimmed.starts_with('<') && trimmed.contains("</") => {
            Ok(ContentKind::Html)
        }
        ContentKind::Html => Err(Error::InvalidContent(
            "Content must be valid HTML or JSON.".into(),
        )),
    }
}

/// Check that a file has an accepted upload extension.
pub fn check_extension<P: AsRef<Path>>(path: P) -> Result<()> {
    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(Error::UnsupportedExtension(ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_content_kind() {
        assert_eq!(detect_content_kind("  {\"name\": 1}"), ContentKind::Json);
        assert_eq!(detect_content_kind("[]"), ContentKind::Json);
        assert_eq!(detect_content_kind("<html></html>"), ContentKind::Html);
        assert_eq!(detect_content_kind("plain words"), ContentKind::Html);
    }

    #[test]
    fn test_validate_json() {
        assert_eq!(validate_content("{\"a\": [1, 2]}").unwrap(), ContentKind::Json);
        let err = validate_content("{\"a\": ").unwrap_err();
        assert!(matches!(err, Error::InvalidContent(_)));
    }

    #[test]
    fn test_validate_html() {
        assert_eq!(
            validate_content("\n<div class=\"resume-container\"></div>").unwrap(),
            ContentKind::Html
        );
        assert!(validate_content("<br>").is_err());
        assert!(validate_content("just text").is_err());
        assert!(validate_content("").is_err());
    }

    #[test]
    fn test_check_extension() {
        assert!(check_extension("resume.HTML").is_ok());
        assert!(check_extension("model.json").is_ok());
        assert!(check_extension("notes.txt").is_ok());
        assert!(matches!(
            check_extension("resume.pdf"),
            Err(Error::UnsupportedExtension(ext)) if ext == "pdf"
        ));
        assert!(check_extension("README").is_err());
    }
}
