//! Persistence and export collaborators.
//!
//! The core hands these collaborators a finished HTML string and never
//! depends on them for its own consistency: a failing store, rasterizer or
//! exporter surfaces as an error (or, for thumbnails, as `None`) and leaves
//! the session untouched.

mod geometry;
mod store;

pub use geometry::{PageGeometry, MAX_PAGES};
pub use store::{FileStore, MemoryStore};

use log::{debug, warn};
use maud::{html, PreEscaped, DOCTYPE};
use serde::{Deserialize, Serialize};

use crate::detect::{detect_content_kind, ContentKind};
use crate::error::Result;
use crate::render::RenderOptions;
use crate::session::BuilderSession;

/// A persisted template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRecord {
    /// Store-assigned id; `None` until first saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    pub content: String,

    #[serde(default)]
    pub content_type: ContentKind,

    /// Rasterized preview as a data URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl TemplateRecord {
    /// Record for uploaded content; the content kind is detected.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            id: None,
            name: name.into(),
            content_type: detect_content_kind(&content),
            content,
            thumbnail_url: None,
        }
    }

    /// Record for generated HTML.
    pub fn html(name: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            content: html.into(),
            content_type: ContentKind::Html,
            thumbnail_url: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Persistence for templates.
pub trait TemplateStore {
    fn fetch(&self, id: &str) -> Result<TemplateRecord>;

    /// Store a new record and return it with its assigned id.
    fn create(&mut self, name: &str, html: &str) -> Result<TemplateRecord>;

    fn update(&mut self, id: &str, name: &str, html: &str) -> Result<TemplateRecord>;
}

/// Renders HTML to an image.
pub trait Rasterizer {
    /// Rasterize a full HTML document, returning a PNG data URI.
    fn rasterize(&self, html: &str) -> Result<String>;
}

/// Turns HTML into a paginated document (typically PDF bytes).
pub trait DocumentExporter {
    fn export(&self, html: &str, geometry: &PageGeometry) -> Result<Vec<u8>>;
}

/// Wrap template content in the fixed-width page used for previews.
pub fn thumbnail_document(content: &str) -> String {
    html! {
        (DOCTYPE)
        html {
            head {
                style {
                    "body { margin: 0; padding: 0; } "
                    ".thumbnail-container { width: 210mm; height: auto; padding: 10mm; "
                    "box-sizing: border-box; font-family: Arial, sans-serif; font-size: 12pt; "
                    "line-height: 1.5; background-color: white; }"
                }
            }
            body {
                div class="thumbnail-container" { (PreEscaped(content)) }
            }
        }
    }
    .into_string()
}

/// Produce a preview image for template content.
///
/// Failures are logged and yield `None`.
pub fn thumbnail(rasterizer: &dyn Rasterizer, content: &str) -> Option<String> {
    match rasterizer.rasterize(&thumbnail_document(content)) {
        Ok(uri) => Some(uri),
        Err(e) => {
            warn!("Thumbnail generation failed: {}", e);
            None
        }
    }
}

/// Fill in a record's missing thumbnail. Returns whether one was added.
pub fn attach_thumbnail(record: &mut TemplateRecord, rasterizer: &dyn Rasterizer) -> bool {
    if record.thumbnail_url.is_some() || record.content.trim().is_empty() {
        return false;
    }
    record.thumbnail_url = thumbnail(rasterizer, &record.content);
    record.thumbnail_url.is_some()
}

/// Export the session's current template.
pub fn export_document(
    session: &BuilderSession,
    exporter: &dyn DocumentExporter,
    geometry: &PageGeometry,
    options: &RenderOptions,
) -> Result<Vec<u8>> {
    let html = session.generate_html(options);
    debug!(
        "Exporting {:?} ({} bytes of HTML)",
        session.name(),
        html.len()
    );
    exporter.export(&html, geometry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct Failing;

    impl Rasterizer for Failing {
        fn rasterize(&self, _html: &str) -> Result<String> {
            Err(Error::Rasterize("no canvas".into()))
        }
    }

    struct Fixed;

    impl Rasterizer for Fixed {
        fn rasterize(&self, html: &str) -> Result<String> {
            assert!(html.contains(r#"<div class="thumbnail-container"><p>Hi</p></div>"#));
            Ok("data:image/png;base64,AAAA".into())
        }
    }

    #[test]
    fn test_record_detects_kind() {
        assert_eq!(TemplateRecord::new("a", "{\"elements\": []}").content_type, ContentKind::Json);
        assert_eq!(TemplateRecord::new("a", "<div></div>").content_type, ContentKind::Html);
    }

    #[test]
    fn test_record_wire_names() {
        let record = TemplateRecord::html("Basic", "<p></p>").with_id("basic-1");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"id":"basic-1","name":"Basic","content":"<p></p>","contentType":"html"}"#
        );
    }

    #[test]
    fn test_thumbnail() {
        assert_eq!(thumbnail(&Failing, "<p>Hi</p>"), None);
        assert_eq!(
            thumbnail(&Fixed, "<p>Hi</p>").as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn test_attach_thumbnail() {
        let mut record = TemplateRecord::html("Basic", "<p>Hi</p>");
        assert!(!attach_thumbnail(&mut record, &Failing));
        assert!(attach_thumbnail(&mut record, &Fixed));
        assert!(!attach_thumbnail(&mut record, &Fixed));
    }
}
