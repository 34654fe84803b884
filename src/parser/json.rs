//! Loading templates from their JSON model.

use crate::error::Result;
use crate::model::BuilderTemplate;

/// Parse a JSON element model into a template.
///
/// Elements without an `id` receive a generated one; duplicate ids are
/// rejected.
pub fn from_json(json: &str) -> Result<BuilderTemplate> {
    let template: BuilderTemplate = serde_json::from_str(json)?;
    template.check_unique_ids()?;
    log::debug!(
        "Loaded template {:?} with {} elements",
        template.name,
        template.elements.len()
    );
    Ok(template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{Column, ElementType, TemplateType};

    #[test]
    fn test_from_json_fills_defaults() {
        let json = r#"{
            "name": "Minimal",
            "templateType": "two-column",
            "elements": [
                {"type": "header", "content": "Jane"},
                {"id": "fixed", "type": "awards", "listItems": ["Best"], "column": "right"}
            ]
        }"#;
        let template = from_json(json).unwrap();
        assert_eq!(template.template_type, TemplateType::TwoColumn);
        assert_eq!(template.elements[0].element_type, ElementType::Header);
        assert!(template.elements[0].id.as_str().starts_with("element-"));
        assert_eq!(template.elements[1].id.as_str(), "fixed");
        assert_eq!(template.elements[1].column, Column::Right);
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let json = r#"{"name": "x", "elements": [{"id": "a", "type": "skills"}, {"id": "a", "type": "summary"}]}"#;
        assert!(matches!(from_json(json), Err(Error::DuplicateElementId(id)) if id == "a"));
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(from_json("{\"elements\": 3}"), Err(Error::Json(_))));
    }
}
