//! # resumekit
//!
//! Résumé template builder for Rust.
//!
//! This library turns résumé HTML into an editable element model, lets an
//! interactive session insert, reorder and restyle elements, and renders
//! the model back into a standalone, styled HTML document.
//!
//! ## Quick Start
//!
//! ```no_run
//! use resumekit::{parse_file, generate_html};
//!
//! fn main() -> resumekit::Result<()> {
//!     // Import a template
//!     let template = parse_file("modern.html")?;
//!
//!     // Render it back
//!     let html = generate_html(&template);
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Single and two-column layouts**: sidebar/main partitioning by element column
//! - **Lenient import**: unknown markup is skipped, missing fields become empty
//! - **Deterministic output**: identical models always render identical HTML
//! - **Builder sessions**: palette inserts, drag and drop, property edits
//! - **Parallel batches**: uses Rayon when importing many documents

pub mod detect;
pub mod error;
pub mod export;
pub mod model;
pub mod parser;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use detect::{check_extension, detect_content_kind, validate_content, ContentKind};
pub use error::{Error, Result};
pub use export::{
    DocumentExporter, FileStore, MemoryStore, PageGeometry, Rasterizer, TemplateRecord,
    TemplateStore,
};
pub use model::{
    BuilderTemplate, Column, Element, ElementId, ElementType, StyleMap, TemplateType,
};
pub use parser::{ErrorMode, HtmlParser, ParseOptions, ParsedResume};
pub use render::{HtmlGenerator, JsonFormat, RenderOptions};
pub use session::{BuilderSession, DropPosition, Palette, SessionState};

use std::path::Path;

/// Parse résumé HTML into an element sequence.
///
/// # Example
///
/// ```
/// use resumekit::{parse_html, TemplateType};
///
/// let parsed = parse_html(r#"<div class="resume-container"><div class="header">Jane</div></div>"#)?;
/// assert_eq!(parsed.template_type, TemplateType::Single);
/// assert_eq!(parsed.elements.len(), 1);
/// # Ok::<(), resumekit::Error>(())
/// ```
pub fn parse_html(html: &str) -> Result<ParsedResume> {
    HtmlParser::new().parse(html)
}

/// Parse résumé HTML with custom options.
///
/// # Example
///
/// ```
/// use resumekit::{parse_html_with_options, ParseOptions};
///
/// let options = ParseOptions::new().strict();
/// assert!(parse_html_with_options("<p>no container</p>", &options).is_err());
/// ```
pub fn parse_html_with_options(html: &str, options: &ParseOptions) -> Result<ParsedResume> {
    HtmlParser::with_options(options.clone()).parse(html)
}

/// Import a template file (`.html`, `.json` or `.txt`).
///
/// JSON content is read as an element model; anything else is parsed as
/// HTML and named after the file stem.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<BuilderTemplate> {
    parse_file_with_options(path, &ParseOptions::default())
}

/// Import a template file with custom parse options.
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &ParseOptions,
) -> Result<BuilderTemplate> {
    let path = path.as_ref();
    check_extension(path)?;
    let content = std::fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    import_content(name, &content, options)
}

/// Import uploaded content as a template.
pub fn import_content(name: &str, content: &str, options: &ParseOptions) -> Result<BuilderTemplate> {
    if options.is_strict() {
        validate_content(content)?;
    }
    match detect_content_kind(content) {
        ContentKind::Json => {
            let mut template = parser::from_json(content)?;
            if template.name.is_empty() {
                template.name = name.to_string();
            }
            Ok(template)
        }
        ContentKind::Html => Ok(parse_html_with_options(content, options)?.into_template(name)),
    }
}

/// Render a template to HTML with default options.
pub fn generate_html(template: &BuilderTemplate) -> String {
    render::to_html(template, &RenderOptions::default())
}

/// Render a template to HTML with custom options.
pub fn generate_html_with_options(template: &BuilderTemplate, options: &RenderOptions) -> String {
    render::to_html(template, options)
}

/// Builder for importing and rendering templates.
///
/// # Example
///
/// ```no_run
/// use resumekit::ResumeKit;
///
/// let html = ResumeKit::new()
///     .strict()
///     .with_title("Untitled")
///     .parse_file("modern.html")?
///     .to_html();
/// # Ok::<(), resumekit::Error>(())
/// ```
pub struct ResumeKit {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl ResumeKit {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Reject content that is not usable HTML with a resume container.
    pub fn strict(mut self) -> Self {
        self.parse_options = self.parse_options.strict();
        self
    }

    /// Enable lenient parsing mode.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Keep only inline styles on imported elements.
    pub fn without_default_styles(mut self) -> Self {
        self.parse_options = self.parse_options.with_default_styles(false);
        self
    }

    /// Set the document title used for unnamed templates.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_fallback_title(title);
        self
    }

    /// Set the `lang` attribute of generated documents.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_lang(lang);
        self
    }

    /// Omit `data-type` markers from generated sections.
    pub fn without_type_markers(mut self) -> Self {
        self.render_options = self.render_options.with_type_markers(false);
        self
    }

    /// Import HTML or JSON content.
    pub fn parse(self, name: &str, content: &str) -> Result<ResumeKitResult> {
        let template = import_content(name, content, &self.parse_options)?;
        Ok(ResumeKitResult {
            template,
            render_options: self.render_options,
        })
    }

    /// Import a template file.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<ResumeKitResult> {
        let template = parse_file_with_options(path, &self.parse_options)?;
        Ok(ResumeKitResult {
            template,
            render_options: self.render_options,
        })
    }
}

impl Default for ResumeKit {
    fn default() -> Self {
        Self::new()
    }
}

/// An imported template, ready to render or edit.
pub struct ResumeKitResult {
    /// The imported template
    pub template: BuilderTemplate,
    /// Render options to use
    render_options: RenderOptions,
}

impl ResumeKitResult {
    /// Render to HTML.
    pub fn to_html(&self) -> String {
        render::to_html(&self.template, &self.render_options)
    }

    /// Serialize the element model to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.template, format)
    }

    /// Get the template.
    pub fn template(&self) -> &BuilderTemplate {
        &self.template
    }

    /// Open an editing session on the template.
    pub fn into_session(self) -> BuilderSession {
        BuilderSession::from_template(self.template)
    }
}
