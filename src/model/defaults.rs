//! Seed values for newly created elements.
//!
//! These are only consulted when an element is created; they never
//! overwrite fields of an existing element.

use super::{Column, ElementType, StyleMap};

/// Default content for a new element of `element_type`.
pub fn default_content(element_type: &ElementType) -> String {
    match element_type {
        ElementType::Header => "John Doe\n123 Main Street, City, State 12345 | (555) 123-4567 | email@example.com | linkedin.com/in/example".to_string(),
        ElementType::Summary => "Experienced professional with over 8 years in project management.".to_string(),
        ElementType::Experience => "Senior Project Manager | ABC Corporation - New York, NY | January 2020 - Present".to_string(),
        ElementType::Education => "Master of Business Administration (MBA) | University of Business - New York, NY | Graduated: May 2015".to_string(),
        ElementType::Projects => "Project Name | January 2023 - June 2023".to_string(),
        other => other.as_str().to_uppercase(),
    }
}

/// Default bullet points for a new element of `element_type`.
pub fn default_list_items(element_type: &ElementType) -> Vec<String> {
    let items: &[&str] = match element_type {
        ElementType::Header | ElementType::Summary | ElementType::Custom(_) => &[],
        ElementType::Experience => &[
            "Lead a team of 10 project coordinators managing 15+ concurrent client projects.",
            "Implemented new project management methodology resulting in 20% reduction in delivery time.",
        ],
        ElementType::Education => &["Concentration in Operations Management, 3.9 GPA"],
        ElementType::Skills => &[
            "Project Management",
            "Team Leadership",
            "Budget Management",
            "Strategic Planning",
        ],
        ElementType::Certifications => &[
            "Project Management Professional (PMP), Project Management Institute, 2018",
            "Certified Scrum Master (CSM), Scrum Alliance, 2017",
        ],
        ElementType::Languages => &["English - Native", "Spanish - Fluent"],
        ElementType::Projects => &["Developed a web application to streamline internal processes."],
        ElementType::Awards => &["Employee of the Year, ABC Corporation, 2022"],
        ElementType::References => &["Available upon request"],
    };
    items.iter().map(|s| s.to_string()).collect()
}

/// Style shared by every non-header element.
pub fn base_styles() -> StyleMap {
    StyleMap::new()
        .with("padding", "0 20px")
        .with("marginBottom", "25px")
        .with("color", "#333")
        .with("fontFamily", "'Arial', sans-serif")
        .with("lineHeight", "1.6")
        .with("textAlign", "left")
        .with("backgroundColor", "#ffffff")
}

/// Default styles for a new element of `element_type`.
pub fn default_styles(element_type: &ElementType) -> StyleMap {
    match element_type {
        ElementType::Header => base_styles()
            .with("textAlign", "center")
            .with("borderBottom", "2px solid #2c3e50")
            .with("padding", "20px"),
        _ => base_styles(),
    }
}

/// Default column for a new element of `element_type`.
pub fn default_column(element_type: &ElementType) -> Column {
    match element_type {
        ElementType::Header
        | ElementType::Skills
        | ElementType::Languages
        | ElementType::Certifications => Column::Left,
        _ => Column::Right,
    }
}
