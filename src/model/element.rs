//! Resume elements: one content block of a template.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::defaults;
use super::fields::{CompositeFields, EducationFields, ExperienceFields, ProjectFields};
use super::StyleMap;

/// Opaque element identifier, unique within a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Generate a fresh, globally unique id.
    pub fn generate() -> Self {
        Self(format!("element-{}", uuid::Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Semantic type of an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ElementType {
    Header,
    Summary,
    Experience,
    Education,
    Skills,
    Certifications,
    Languages,
    Projects,
    Awards,
    References,
    /// User-defined section, stored lowercase.
    Custom(String),
}

impl ElementType {
    /// Built-in types in palette order.
    pub const BUILTIN: [ElementType; 10] = [
        ElementType::Header,
        ElementType::Summary,
        ElementType::Experience,
        ElementType::Education,
        ElementType::Skills,
        ElementType::Certifications,
        ElementType::Languages,
        ElementType::Projects,
        ElementType::Awards,
        ElementType::References,
    ];

    /// Resolve a type name. Unknown names become lowercase custom types.
    pub fn parse(name: &str) -> Self {
        let lower = name.trim().to_lowercase();
        match lower.as_str() {
            "header" => Self::Header,
            "summary" => Self::Summary,
            "experience" => Self::Experience,
            "education" => Self::Education,
            "skills" => Self::Skills,
            "certifications" => Self::Certifications,
            "languages" => Self::Languages,
            "projects" => Self::Projects,
            "awards" => Self::Awards,
            "references" => Self::References,
            _ => Self::Custom(lower),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Header => "header",
            Self::Summary => "summary",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Skills => "skills",
            Self::Certifications => "certifications",
            Self::Languages => "languages",
            Self::Projects => "projects",
            Self::Awards => "awards",
            Self::References => "references",
            Self::Custom(name) => name,
        }
    }

    /// Whether the content is a pipe-delimited field record.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Experience | Self::Education | Self::Projects)
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl From<String> for ElementType {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&str> for ElementType {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<ElementType> for String {
    fn from(t: ElementType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column placement in a two-column template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    /// Sidebar
    #[default]
    Left,
    /// Main content
    Right,
}

impl Column {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resume content block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Unique id within the template
    #[serde(default = "ElementId::generate")]
    pub id: ElementId,

    /// Semantic type
    #[serde(rename = "type")]
    pub element_type: ElementType,

    /// Free-form text; pipe-delimited record for composite types
    #[serde(default)]
    pub content: String,

    /// Bullet points, in display order
    #[serde(default)]
    pub list_items: Vec<String>,

    /// Inline styles
    #[serde(default)]
    pub styles: StyleMap,

    /// Placement in two-column templates
    #[serde(default)]
    pub column: Column,
}

impl Element {
    /// Create an element seeded with the type's default content, list items,
    /// styles and column.
    pub fn new(element_type: ElementType) -> Self {
        Self {
            id: ElementId::generate(),
            content: defaults::default_content(&element_type),
            list_items: defaults::default_list_items(&element_type),
            styles: defaults::default_styles(&element_type),
            column: defaults::default_column(&element_type),
            element_type,
        }
    }

    /// Create an element with empty content and no list items, but with the
    /// type's default styles and column.
    pub fn blank(element_type: ElementType) -> Self {
        Self {
            id: ElementId::generate(),
            content: String::new(),
            list_items: Vec::new(),
            styles: defaults::default_styles(&element_type),
            column: defaults::default_column(&element_type),
            element_type,
        }
    }

    pub fn with_id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_list_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.list_items = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_column(mut self, column: Column) -> Self {
        self.column = column;
        self
    }

    pub fn with_styles(mut self, styles: StyleMap) -> Self {
        self.styles = styles;
        self
    }

    /// Replace the content. Composite types are normalized into their
    /// canonical `a | b | c` form.
    pub fn set_content(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.content = match self.element_type {
            ElementType::Experience => ExperienceFields::from_content(&text).to_content(),
            ElementType::Education => EducationFields::from_content(&text).to_content(),
            ElementType::Projects => ProjectFields::from_content(&text).to_content(),
            _ => text,
        };
    }

    /// Experience view of the content.
    pub fn experience_fields(&self) -> ExperienceFields {
        ExperienceFields::from_content(&self.content)
    }

    /// Education view of the content.
    pub fn education_fields(&self) -> EducationFields {
        EducationFields::from_content(&self.content)
    }

    /// Project view of the content.
    pub fn project_fields(&self) -> ProjectFields {
        ProjectFields::from_content(&self.content)
    }

    /// Equal in type, content, list items and column, ignoring id and styles.
    pub fn is_equivalent(&self, other: &Element) -> bool {
        self.element_type == other.element_type
            && self.content == other.content
            && self.list_items == other.list_items
            && self.column == other.column
    }
}
