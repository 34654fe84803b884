//! Resume HTML parser using kuchikiki.

use kuchikiki::traits::TendrilSink;
use kuchikiki::{ElementData, NodeDataRef, NodeRef};
use rayon::prelude::*;

use crate::detect::{validate_content, ContentKind};
use crate::error::{Error, Result};
use crate::model::{
    defaults, parse_style_string, BuilderTemplate, Column, CompositeFields, EducationFields,
    Element, ElementId, ElementType, ExperienceFields, ProjectFields, TemplateType,
};

use super::options::ParseOptions;

/// Elements recovered from a resume document, plus the detected layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResume {
    /// Layout detected from the structural markers
    pub template_type: TemplateType,
    /// Elements in document order (sidebar first for two-column documents)
    pub elements: Vec<Element>,
}

impl ParsedResume {
    /// Wrap the parsed elements in a named template.
    pub fn into_template(self, name: impl Into<String>) -> BuilderTemplate {
        BuilderTemplate::new(name, self.template_type).with_elements(self.elements)
    }
}

/// Resume HTML parser.
///
/// Unrecognized nodes are skipped and missing sub-fields become empty
/// strings, so a lenient parse never fails on malformed markup.
#[derive(Debug, Clone, Default)]
pub struct HtmlParser {
    options: ParseOptions,
}

impl HtmlParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a resume document.
    pub fn parse(&self, html: &str) -> Result<ParsedResume> {
        if self.options.is_strict() && validate_content(html)? != ContentKind::Html {
            return Err(Error::InvalidContent("Expected HTML content, found JSON.".into()));
        }

        let document = kuchikiki::parse_html().one(html);

        let sidebar = document.select_first(".sidebar").ok();
        let main_content = document.select_first(".main-content").ok();

        if let (Some(sidebar), Some(main_content)) = (sidebar, main_content) {
            let mut elements = self.parse_region(sidebar.as_node(), Some(Column::Left));
            let right = self.parse_region(main_content.as_node(), Some(Column::Right));
            log::debug!(
                "Detected two-column layout ({} sidebar, {} main elements)",
                elements.len(),
                right.len()
            );
            elements.extend(right);
            return Ok(ParsedResume {
                template_type: TemplateType::TwoColumn,
                elements,
            });
        }

        let elements = match document.select_first(".resume-container") {
            Ok(container) => self.parse_region(container.as_node(), None),
            Err(()) if self.options.is_strict() => return Err(Error::MissingContainer),
            Err(()) => {
                log::warn!("No resume container found; returning an empty element list");
                Vec::new()
            }
        };
        log::debug!("Detected single-column layout ({} elements)", elements.len());

        Ok(ParsedResume {
            template_type: TemplateType::Single,
            elements,
        })
    }

    /// Parse the direct element children of a region, in document order.
    fn parse_region(&self, region: &NodeRef, column: Option<Column>) -> Vec<Element> {
        region
            .children()
            .filter_map(NodeRef::into_element_ref)
            .enumerate()
            .filter_map(|(index, node)| {
                let parsed = self.parse_node(&node, column);
                if parsed.is_none() {
                    log::debug!(
                        "Skipping unrecognized <{}> at child index {}",
                        &*node.name.local,
                        index
                    );
                }
                parsed
            })
            .collect()
    }

    /// Classify one child node by its structural class marker.
    fn parse_node(&self, node: &NodeDataRef<ElementData>, column: Option<Column>) -> Option<Element> {
        let (classes, style_attr, type_marker) = {
            let attrs = node.attributes.borrow();
            (
                attrs.get("class").unwrap_or_default().to_string(),
                attrs.get("style").unwrap_or_default().to_string(),
                attrs.get("data-type").map(str::to_string),
            )
        };
        let has_class = |name: &str| classes.split_whitespace().any(|c| c == name);
        let scope = node.as_node();

        let (element_type, content, list_items) = if has_class("header") {
            (ElementType::Header, header_text(scope), texts_of(scope, "li"))
        } else if has_class("summary") {
            (ElementType::Summary, text_of(scope, "p"), texts_of(scope, "li"))
        } else if has_class("section") {
            parse_section(scope, type_marker.as_deref())
        } else {
            return None;
        };

        let inline = parse_style_string(&style_attr);
        let styles = if self.options.merge_default_styles {
            defaults::default_styles(&element_type).merged_with(&inline)
        } else {
            inline
        };

        Some(Element {
            id: ElementId::generate(),
            column: column.unwrap_or_else(|| defaults::default_column(&element_type)),
            element_type,
            content,
            list_items,
            styles,
        })
    }
}

/// Parse a `.section` node into `(type, content, list items)`.
///
/// The type comes from the `data-type` marker when present, otherwise from
/// the section title. A section with neither becomes an untitled custom
/// section (`Custom("")`).
fn parse_section(section: &NodeRef, type_marker: Option<&str>) -> (ElementType, String, Vec<String>) {
    let title = text_of(section, ".section-title");
    let element_type = match type_marker.map(str::trim).filter(|t| !t.is_empty()) {
        Some(marker) => ElementType::parse(marker),
        None => ElementType::parse(&title),
    };

    let parsed = match &element_type {
        ElementType::Experience => {
            let job = section.select_first(".job").ok();
            let scope = job.as_ref().map(|j| j.as_node()).unwrap_or(section);
            let fields = ExperienceFields {
                title: text_of(scope, ".job-title"),
                company: text_of(scope, ".company"),
                location: text_of(scope, ".location"),
                date: text_of(scope, ".date"),
            };
            (fields.to_content(), list_with_fallback(scope, ".job-description li"))
        }
        ElementType::Education => {
            let item = section.select_first(".education-item").ok();
            let scope = item.as_ref().map(|i| i.as_node()).unwrap_or(section);
            let fields = EducationFields {
                degree: text_of(scope, ".degree"),
                school: text_of(scope, ".school"),
                location: text_of(scope, ".location"),
                date: text_of(scope, ".date"),
            };
            (fields.to_content(), list_with_fallback(scope, ".edu-description li"))
        }
        ElementType::Projects => {
            let item = section.select_first(".project-item").ok();
            let scope = item.as_ref().map(|i| i.as_node()).unwrap_or(section);
            let fields = ProjectFields {
                title: text_of(scope, ".project-title"),
                date: text_of(scope, ".date"),
            };
            (fields.to_content(), list_with_fallback(scope, ".project-description li"))
        }
        ElementType::Skills => (title, list_with_fallback(section, ".skills-list li")),
        ElementType::Languages => (title, list_with_fallback(section, ".languages-list li")),
        _ => (title, texts_of(section, "li")),
    };

    (element_type, parsed.0, parsed.1)
}

/// Trimmed text of the first match of `selector` under `scope`, or empty.
fn text_of(scope: &NodeRef, selector: &str) -> String {
    scope
        .select_first(selector)
        .map(|node| node.text_contents().trim().to_string())
        .unwrap_or_default()
}

/// Trimmed text of every match of `selector` under `scope`.
fn texts_of(scope: &NodeRef, selector: &str) -> Vec<String> {
    scope
        .select(selector)
        .map(|matches| {
            matches
                .map(|node| node.text_contents().trim().to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Items of the dedicated list, or of any list when the dedicated one is absent.
fn list_with_fallback(scope: &NodeRef, selector: &str) -> Vec<String> {
    let items = texts_of(scope, selector);
    if items.is_empty() {
        texts_of(scope, "li")
    } else {
        items
    }
}

/// Header text without nested list content, one trimmed line per block.
fn header_text(header: &NodeRef) -> String {
    let mut buf = String::new();
    collect_text(header, &mut buf);
    buf.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn collect_text(node: &NodeRef, buf: &mut String) {
    for child in node.children() {
        if let Some(text) = child.as_text() {
            buf.push_str(&text.borrow());
            continue;
        }
        let Some(element) = child.as_element() else {
            continue;
        };
        match &*element.name.local {
            "ul" | "ol" | "script" | "style" => {}
            "br" => buf.push('\n'),
            "div" | "p" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "section" | "header" => {
                buf.push('\n');
                collect_text(&child, buf);
                buf.push('\n');
            }
            _ => collect_text(&child, buf),
        }
    }
}

/// Parse several documents, in parallel unless `options.parallel` is off.
pub fn parse_many<S>(documents: &[S], options: &ParseOptions) -> Vec<Result<ParsedResume>>
where
    S: AsRef<str> + Sync,
{
    let parser = HtmlParser::with_options(options.clone());
    if options.parallel {
        documents
            .par_iter()
            .map(|html| parser.parse(html.as_ref()))
            .collect()
    } else {
        documents
            .iter()
            .map(|html| parser.parse(html.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ErrorMode;

    const TWO_COLUMN: &str = r#"<div class="resume-container"><div class="sidebar"><div class="header">Jane Doe</div></div><div class="main-content"><div class="section"><div class="section-title">Skills</div><ul><li>Go</li></ul></div></div></div>"#;

    #[test]
    fn test_two_column_example() {
        let parsed = HtmlParser::new().parse(TWO_COLUMN).unwrap();
        assert_eq!(parsed.template_type, TemplateType::TwoColumn);
        assert_eq!(parsed.elements.len(), 2);

        let header = &parsed.elements[0];
        assert_eq!(header.element_type, ElementType::Header);
        assert_eq!(header.column, Column::Left);
        assert_eq!(header.content, "Jane Doe");

        let skills = &parsed.elements[1];
        assert_eq!(skills.element_type, ElementType::Skills);
        assert_eq!(skills.column, Column::Right);
        assert_eq!(skills.content, "Skills");
        assert_eq!(skills.list_items, vec!["Go".to_string()]);
    }

    #[test]
    fn test_experience_section() {
        let html = r#"<div class="resume-container">
            <div class="section" style="color: red;">
              <div class="section-title">Experience</div>
              <div class="job">
                <div class="job-title">Engineer</div>
                <div><span class="company">Acme</span> - <span class="location">Berlin</span></div>
                <div class="date">2020 - Present</div>
                <ul class="job-description"><li> Built things </li><li>Shipped</li></ul>
              </div>
            </div>
        </div>"#;
        let parsed = HtmlParser::new().parse(html).unwrap();
        assert_eq!(parsed.template_type, TemplateType::Single);
        let el = &parsed.elements[0];
        assert_eq!(el.element_type, ElementType::Experience);
        assert_eq!(el.content, "Engineer | Acme - Berlin | 2020 - Present");
        assert_eq!(el.list_items, vec!["Built things", "Shipped"]);
        assert_eq!(el.column, Column::Right);
        assert_eq!(el.styles.get("color"), Some("red"));
        assert_eq!(el.styles.get("lineHeight"), Some("1.6"));
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let html = r#"<div class="resume-container"><div class="section"><div class="section-title">PROJECTS</div></div></div>"#;
        let parsed = HtmlParser::new().parse(html).unwrap();
        assert_eq!(parsed.elements[0].element_type, ElementType::Projects);
        assert_eq!(parsed.elements[0].content, " | ");
        assert!(parsed.elements[0].list_items.is_empty());
    }

    #[test]
    fn test_header_text_excludes_lists() {
        let html = r#"<div class="resume-container"><div class="header">
              <div class="name">John Doe</div>
              <div class="contact-info">  john@example.com </div>
              <ul><li>Portfolio</li></ul>
            </div></div>"#;
        let parsed = HtmlParser::new().parse(html).unwrap();
        let header = &parsed.elements[0];
        assert_eq!(header.content, "John Doe\njohn@example.com");
        assert_eq!(header.list_items, vec!["Portfolio"]);
        assert_eq!(header.column, Column::Left);
        assert_eq!(header.styles.get("textAlign"), Some("center"));
    }

    #[test]
    fn test_custom_section_and_skipped_nodes() {
        let html = r#"<div class="resume-container">
            <p>stray text</p>
            <div class="section"><div class="section-title">Volunteer Work</div><ul><li>Food bank</li></ul></div>
            <div class="section"><ul><li>no title</li></ul></div>
            <div class="footer">ignored</div>
        </div>"#;
        let parsed = HtmlParser::new().parse(html).unwrap();
        assert_eq!(parsed.elements.len(), 2);
        assert_eq!(
            parsed.elements[0].element_type,
            ElementType::Custom("volunteer work".into())
        );
        assert_eq!(parsed.elements[0].content, "Volunteer Work");

        let untitled = &parsed.elements[1];
        assert_eq!(untitled.element_type, ElementType::Custom(String::new()));
        assert_eq!(untitled.content, "");
        assert_eq!(untitled.list_items, ["no title"]);
        assert_eq!(untitled.column, Column::Right);
    }

    #[test]
    fn test_type_marker_wins_over_title() {
        let html = r#"<div class="resume-container"><div class="section" data-type="skills"><div class="section-title">Core Competencies</div><ul class="skills-list"><li>Rust</li></ul></div></div>"#;
        let parsed = HtmlParser::new().parse(html).unwrap();
        assert_eq!(parsed.elements[0].element_type, ElementType::Skills);
        assert_eq!(parsed.elements[0].content, "Core Competencies");
    }

    #[test]
    fn test_lenient_and_strict_without_container() {
        let html = "<div><p>nothing here</p></div>";
        let parsed = HtmlParser::new().parse(html).unwrap();
        assert!(parsed.elements.is_empty());

        let strict = HtmlParser::with_options(ParseOptions::new().with_error_mode(ErrorMode::Strict));
        assert!(matches!(strict.parse(html), Err(Error::MissingContainer)));
        assert!(matches!(
            strict.parse("not markup"),
            Err(Error::InvalidContent(_))
        ));
    }

    #[test]
    fn test_parse_without_default_styles() {
        let html = r#"<div class="resume-container"><div class="summary" style="color: blue"><p>Hello</p></div></div>"#;
        let parser = HtmlParser::with_options(ParseOptions::new().with_default_styles(false));
        let el = &parser.parse(html).unwrap().elements[0];
        assert_eq!(el.content, "Hello");
        assert_eq!(el.styles.len(), 1);
    }

    #[test]
    fn test_parse_many_sequential_and_parallel() {
        let docs = vec![TWO_COLUMN.to_string(), "<p>x</p>".to_string()];
        for options in [ParseOptions::new(), ParseOptions::new().sequential()] {
            let results = parse_many(&docs, &options);
            assert_eq!(results.len(), 2);
            assert_eq!(results[0].as_ref().unwrap().elements.len(), 2);
            assert!(results[1].as_ref().unwrap().elements.is_empty());
        }
    }
}
