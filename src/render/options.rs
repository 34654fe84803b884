//! Rendering options and configuration.

/// Title used when a template has no name.
pub const DEFAULT_TITLE: &str = "Professional Resume";

/// Options for generating template HTML.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Document title when the template name is empty
    pub fallback_title: String,

    /// Value of the `lang` attribute on `<html>`
    pub lang: String,

    /// Emit `data-type` on section nodes so the element type survives title edits
    pub type_markers: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback document title.
    pub fn with_fallback_title(mut self, title: impl Into<String>) -> Self {
        self.fallback_title = title.into();
        self
    }

    /// Set the document language.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Enable or disable `data-type` markers.
    pub fn with_type_markers(mut self, enabled: bool) -> Self {
        self.type_markers = enabled;
        self
    }

    /// Resolve the document title for a template name.
    pub fn title_for<'a>(&'a self, name: &'a str) -> &'a str {
        if name.trim().is_empty() {
            &self.fallback_title
        } else {
            name
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            fallback_title: DEFAULT_TITLE.to_string(),
            lang: "en".to_string(),
            type_markers: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_fallback_title("Untitled")
            .with_lang("de")
            .with_type_markers(false);

        assert_eq!(options.fallback_title, "Untitled");
        assert_eq!(options.lang, "de");
        assert!(!options.type_markers);
    }

    #[test]
    fn test_title_for() {
        let options = RenderOptions::default();
        assert_eq!(options.title_for(""), DEFAULT_TITLE);
        assert_eq!(options.title_for("  "), DEFAULT_TITLE);
        assert_eq!(options.title_for("Modern"), "Modern");
    }
}
