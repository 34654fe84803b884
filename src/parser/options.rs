//! Parsing options and configuration.

/// Options for parsing resume HTML.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Layer each type's default styles under the inline styles
    pub merge_default_styles: bool,

    /// Whether to use parallel processing when parsing many documents
    pub parallel: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable strict mode (reject content without a resume container).
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Enable lenient mode (skip invalid content).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Enable or disable layering of default styles.
    pub fn with_default_styles(mut self, merge: bool) -> Self {
        self.merge_default_styles = merge;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.error_mode == ErrorMode::Strict
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Lenient,
            merge_default_styles: true,
            parallel: true,
        }
    }
}

/// Error handling mode during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Require valid HTML with a resume container
    Strict,
    /// Skip whatever cannot be understood and continue
    #[default]
    Lenient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .strict()
            .with_default_styles(false)
            .sequential();

        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert!(options.is_strict());
        assert!(!options.merge_default_styles);
        assert!(!options.parallel);
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert!(options.merge_default_styles);
        assert!(options.parallel);
    }
}
