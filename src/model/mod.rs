//! Element model for resume templates.
//!
//! This module defines the intermediate representation that sits between
//! HTML parsing, interactive editing and HTML generation. Elements are plain
//! data; per-type seed values live in [`defaults`].

pub mod defaults;
mod element;
mod fields;
mod style;
mod template;

pub use element::{Column, Element, ElementId, ElementType};
pub use fields::{CompositeFields, EducationFields, ExperienceFields, ProjectFields};
pub use style::{
    parse_style_string, serialize_style_map, to_camel_case, to_kebab_case, StyleMap,
};
pub use template::{BuilderTemplate, TemplateType};
