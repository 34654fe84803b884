//! Template-level types.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::{Column, Element, ElementId};
use crate::error::{Error, Result};

/// Page layout of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateType {
    /// One container, elements in sequence order
    #[default]
    Single,
    /// Sidebar plus main content; element columns are honored
    TwoColumn,
}

impl TemplateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::TwoColumn => "two-column",
        }
    }

    pub fn is_two_column(&self) -> bool {
        matches!(self, Self::TwoColumn)
    }
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The document edited by a builder session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderTemplate {
    /// Display name; required before saving
    #[serde(default)]
    pub name: String,

    /// Elements in render order
    #[serde(default)]
    pub elements: Vec<Element>,

    /// Layout, fixed once chosen
    #[serde(default)]
    pub template_type: TemplateType,
}

impl BuilderTemplate {
    /// Create an empty template.
    pub fn new(name: impl Into<String>, template_type: TemplateType) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
            template_type,
        }
    }

    pub fn with_elements(mut self, elements: Vec<Element>) -> Self {
        self.elements = elements;
        self
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Index of the element with `id`.
    pub fn position(&self, id: &ElementId) -> Option<usize> {
        self.elements.iter().position(|e| &e.id == id)
    }

    /// Get an element by id.
    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| &e.id == id)
    }

    /// Get a mutable element by id.
    pub fn get_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| &e.id == id)
    }

    /// Elements placed in `column`, in sequence order.
    pub fn column_elements(&self, column: Column) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |e| e.column == column)
    }

    /// Check that every element id is unique.
    pub fn check_unique_ids(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.elements.len());
        for element in &self.elements {
            if !seen.insert(&element.id) {
                return Err(Error::DuplicateElementId(element.id.to_string()));
            }
        }
        Ok(())
    }

    /// Check that the template can be persisted.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::MissingTemplateName);
        }
        self.check_unique_ids()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementType;

    #[test]
    fn test_template_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&TemplateType::TwoColumn).unwrap(),
            "\"two-column\""
        );
        let t: TemplateType = serde_json::from_str("\"single\"").unwrap();
        assert_eq!(t, TemplateType::Single);
    }

    #[test]
    fn test_validate() {
        let template = BuilderTemplate::new("  ", TemplateType::Single);
        assert!(matches!(template.validate(), Err(Error::MissingTemplateName)));

        let el = Element::new(ElementType::Skills);
        let template = BuilderTemplate::new("Mine", TemplateType::Single)
            .with_elements(vec![el.clone(), el]);
        assert!(matches!(
            template.validate(),
            Err(Error::DuplicateElementId(_))
        ));
    }

    #[test]
    fn test_column_elements() {
        let template = BuilderTemplate::new("Two", TemplateType::TwoColumn).with_elements(vec![
            Element::new(ElementType::Header),
            Element::new(ElementType::Experience),
            Element::new(ElementType::Skills),
        ]);
        let left: Vec<_> = template
            .column_elements(Column::Left)
            .map(|e| e.element_type.clone())
            .collect();
        assert_eq!(left, vec![ElementType::Header, ElementType::Skills]);
        assert_eq!(template.column_elements(Column::Right).count(), 1);
    }
}
