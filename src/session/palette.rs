//! Element palette: the built-in section types plus user-defined ones.

use crate::model::ElementType;

/// Types offered for insertion, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    custom: Vec<String>,
}

impl Palette {
    pub fn new() -> Self {
        Self { custom: Vec::new() }
    }

    /// Add a custom section type.
    ///
    /// The name is trimmed and lowercased. Returns `false` for empty names
    /// and names already on the palette.
    pub fn add_custom_section(&mut self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        if name.is_empty() || self.contains(&name) {
            return false;
        }
        self.custom.push(name);
        true
    }

    /// Whether a type name is on the palette.
    pub fn contains(&self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        ElementType::BUILTIN.iter().any(|t| t.as_str() == name) || self.custom.contains(&name)
    }

    /// Custom section names in insertion order.
    pub fn custom_sections(&self) -> &[String] {
        &self.custom
    }

    /// All entries: built-ins first, then custom sections.
    pub fn entries(&self) -> Vec<ElementType> {
        ElementType::BUILTIN
            .iter()
            .cloned()
            .chain(self.custom.iter().map(|name| ElementType::Custom(name.clone())))
            .collect()
    }

    /// Display label for an entry (`"skills"` -> `"Skills"`).
    pub fn label(element_type: &ElementType) -> String {
        let name = element_type.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
