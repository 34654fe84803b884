//! Structured views over the pipe-delimited content of composite elements.
//!
//! Experience, education and project elements store their sub-fields in a
//! single display string such as `"Title | Company - Location | Date"`.
//! All positional parsing of that string happens here.

/// Separator between positional fields.
pub const FIELD_SEPARATOR: char = '|';

/// Separator between organization and location inside the middle field.
pub const LOCATION_SEPARATOR: &str = " - ";

/// Split `content` into exactly `n` trimmed fields.
///
/// Missing fields are empty; extra fields are folded into the last one.
fn split_fields(content: &str, n: usize) -> Vec<String> {
    let mut parts: Vec<String> = content
        .split(FIELD_SEPARATOR)
        .map(|s| s.trim().to_string())
        .collect();

    if parts.len() > n {
        let rest = parts.split_off(n - 1).join(" | ");
        parts.push(rest);
    }
    parts.resize(n, String::new());
    parts
}

/// Split `"Company - Location"` at the first spaced hyphen.
fn split_location(field: &str) -> (String, String) {
    match field.split_once(LOCATION_SEPARATOR) {
        Some((org, location)) => (org.trim().to_string(), location.trim().to_string()),
        None => (field.trim().to_string(), String::new()),
    }
}

fn join_location(org: &str, location: &str) -> String {
    if location.is_empty() {
        org.to_string()
    } else {
        format!("{}{}{}", org, LOCATION_SEPARATOR, location)
    }
}

/// Conversion between a composite record and its display string.
pub trait CompositeFields: Sized {
    /// Parse the display string. Never fails; missing parts are empty.
    fn from_content(content: &str) -> Self;

    /// Format back into the display string.
    fn to_content(&self) -> String;
}

/// Fields of an experience entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceFields {
    pub title: String,
    pub company: String,
    pub location: String,
    pub date: String,
}

impl CompositeFields for ExperienceFields {
    fn from_content(content: &str) -> Self {
        let f = split_fields(content, 3);
        let (company, location) = split_location(&f[1]);
        Self {
            title: f[0].clone(),
            company,
            location,
            date: f[2].clone(),
        }
    }

    fn to_content(&self) -> String {
        format!(
            "{} | {} | {}",
            self.title,
            join_location(&self.company, &self.location),
            self.date
        )
    }
}

/// Fields of an education entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationFields {
    pub degree: String,
    pub school: String,
    pub location: String,
    pub date: String,
}

impl CompositeFields for EducationFields {
    fn from_content(content: &str) -> Self {
        let f = split_fields(content, 3);
        let (school, location) = split_location(&f[1]);
        Self {
            degree: f[0].clone(),
            school,
            location,
            date: f[2].clone(),
        }
    }

    fn to_content(&self) -> String {
        format!(
            "{} | {} | {}",
            self.degree,
            join_location(&self.school, &self.location),
            self.date
        )
    }
}

/// Fields of a project entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFields {
    pub title: String,
    pub date: String,
}

impl CompositeFields for ProjectFields {
    fn from_content(content: &str) -> Self {
        let f = split_fields(content, 2);
        Self {
            title: f[0].clone(),
            date: f[1].clone(),
        }
    }

    fn to_content(&self) -> String {
        format!("{} | {}", self.title, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_fields() {
        let f = ExperienceFields::from_content(
            "Senior Project Manager | ABC Corporation - New York, NY | January 2020 - Present",
        );
        assert_eq!(f.title, "Senior Project Manager");
        assert_eq!(f.company, "ABC Corporation");
        assert_eq!(f.location, "New York, NY");
        assert_eq!(f.date, "January 2020 - Present");
    }

    #[test]
    fn test_missing_location_and_fields() {
        let f = ExperienceFields::from_content("Engineer | Acme");
        assert_eq!(f.company, "Acme");
        assert_eq!(f.location, "");
        assert_eq!(f.date, "");
        assert_eq!(f.to_content(), "Engineer | Acme | ");

        let empty = EducationFields::from_content("");
        assert_eq!(empty, EducationFields::default());
    }

    #[test]
    fn test_hyphenated_company() {
        let f = ExperienceFields::from_content("Dev | Coca-Cola - Atlanta | 2020");
        assert_eq!(f.company, "Coca-Cola");
        assert_eq!(f.location, "Atlanta");

        // Only the first spaced hyphen separates; the rest belongs to the location.
        let f = ExperienceFields::from_content("Dev | Acme - Berlin - Mitte | 2020");
        assert_eq!(f.company, "Acme");
        assert_eq!(f.location, "Berlin - Mitte");
    }

    #[test]
    fn test_extra_fields_fold_into_last() {
        let f = ProjectFields::from_content("Compiler | 2021 | 2022");
        assert_eq!(f.title, "Compiler");
        assert_eq!(f.date, "2021 | 2022");
    }

    #[test]
    fn test_to_content_is_stable() {
        let content = "MBA | University of Business - New York, NY | Graduated: May 2015";
        let f = EducationFields::from_content(content);
        assert_eq!(f.to_content(), content);
        assert_eq!(EducationFields::from_content(&f.to_content()), f);
    }
}
