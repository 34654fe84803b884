//! Shared stylesheet embedded in generated documents.

use std::borrow::Cow;

use crate::model::TemplateType;

/// Rules shared by every layout. Selectors target the structural classes,
/// never individual elements.
pub const BASE_CSS: &str = "\
* { margin: 0; padding: 0; box-sizing: border-box; font-family: 'Arial', sans-serif; }
body { background-color: #f5f5f5; color: #333; line-height: 1.6; padding: 20px; }
.resume-container { max-width: 800px; margin: 0 auto; background-color: white; box-shadow: 0 0 10px rgba(0, 0, 0, 0.1); }
.header { margin-bottom: 20px; padding-bottom: 15px; white-space: pre-line; }
.section { margin-bottom: 20px; }
.section-title { font-size: 18px; color: #2c3e50; font-weight: bold; border-bottom: 1px solid #ddd; padding-bottom: 5px; margin-bottom: 10px; }
.job, .education-item, .project-item { margin-bottom: 15px; }
.job-title, .degree, .project-title { font-weight: bold; font-size: 14px; }
.company, .school { font-weight: bold; }
.date { color: #777; font-style: italic; font-size: 12px; }
.job-description, .edu-description, .project-description { margin-top: 5px; }
.skills-list, .languages-list { list-style-type: none; }
.skills-list li, .languages-list li { padding: 3px 0; }
.summary { margin-bottom: 20px; line-height: 1.8; }
ul { list-style-type: disc; margin-left: 15px; }
@media print { body { background-color: white; padding: 0; } .resume-container { box-shadow: none; } }
";

/// Extra rules for the sidebar + main content layout.
pub const TWO_COLUMN_CSS: &str = "\
.resume-container { display: flex; padding: 0; }
.sidebar { width: 30%; padding: 20px; background-color: #f9f9f9; }
.main-content { width: 70%; padding: 20px; }
";

/// Stylesheet for a layout.
pub fn stylesheet(template_type: TemplateType) -> Cow<'static, str> {
    match template_type {
        TemplateType::Single => Cow::Borrowed(BASE_CSS),
        TemplateType::TwoColumn => Cow::Owned(format!("{}{}", BASE_CSS, TWO_COLUMN_CSS)),
    }
}
