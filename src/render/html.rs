//! HTML generation for resume templates.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::model::{BuilderTemplate, Column, Element, ElementType, TemplateType};

use super::stylesheet::stylesheet;
use super::RenderOptions;

/// Generate a standalone HTML document for a template.
pub fn to_html(template: &BuilderTemplate, options: &RenderOptions) -> String {
    HtmlGenerator::new(options.clone()).render(template)
}

/// HTML generator.
///
/// Generation is total: unknown element types fall back to a titled list,
/// and identical input always produces identical markup.
#[derive(Debug, Clone, Default)]
pub struct HtmlGenerator {
    options: RenderOptions,
}

impl HtmlGenerator {
    /// Create a new HTML generator.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a template.
    pub fn render(&self, template: &BuilderTemplate) -> String {
        self.generate(&template.name, template.template_type, &template.elements)
    }

    /// Render a named element sequence with the given layout.
    pub fn generate(
        &self,
        name: &str,
        template_type: TemplateType,
        elements: &[Element],
    ) -> String {
        let title = self.options.title_for(name);
        let css = stylesheet(template_type);

        let body = match template_type {
            TemplateType::Single => html! {
                div class="resume-container" style="padding: 20px;" {
                    @for element in elements {
                        (self.render_element(element))
                    }
                }
            },
            TemplateType::TwoColumn => html! {
                div class="resume-container" {
                    div class="sidebar" {
                        @for element in elements.iter().filter(|e| e.column == Column::Left) {
                            (self.render_element(element))
                        }
                    }
                    div class="main-content" {
                        @for element in elements.iter().filter(|e| e.column == Column::Right) {
                            (self.render_element(element))
                        }
                    }
                }
            },
        };

        let page: Markup = html! {
            (DOCTYPE)
            html lang=(self.options.lang) {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (title) }
                    style { (PreEscaped(css.as_ref())) }
                }
                body { (body) }
            }
        };

        page.into_string()
    }

    /// Render the fragment for one element.
    pub fn render_element(&self, element: &Element) -> Markup {
        let style = (!element.styles.is_empty()).then(|| element.styles.to_css());

        match &element.element_type {
            ElementType::Header => html! {
                div class="header" style=[style] {
                    (element.content)
                    @if !element.list_items.is_empty() {
                        (bullet_list(&element.list_items, None))
                    }
                }
            },
            ElementType::Summary => html! {
                div class="summary" style=[style] {
                    p { (element.content) }
                    @if !element.list_items.is_empty() {
                        (bullet_list(&element.list_items, None))
                    }
                }
            },
            ElementType::Experience => {
                let fields = element.experience_fields();
                self.section(element, style, html! {
                    div class="section-title" { "EXPERIENCE" }
                    div class="job" {
                        div class="job-title" { (fields.title) }
                        (org_line("company", &fields.company, &fields.location))
                        div class="date" { (fields.date) }
                        (bullet_list(&element.list_items, Some("job-description")))
                    }
                })
            }
            ElementType::Education => {
                let fields = element.education_fields();
                self.section(element, style, html! {
                    div class="section-title" { "EDUCATION" }
                    div class="education-item" {
                        div class="degree" { (fields.degree) }
                        (org_line("school", &fields.school, &fields.location))
                        div class="date" { (fields.date) }
                        (bullet_list(&element.list_items, Some("edu-description")))
                    }
                })
            }
            ElementType::Projects => {
                let fields = element.project_fields();
                self.section(element, style, html! {
                    div class="section-title" { "PROJECTS" }
                    div class="project-item" {
                        div class="project-title" { (fields.title) }
                        div class="date" { (fields.date) }
                        (bullet_list(&element.list_items, Some("project-description")))
                    }
                })
            }
            ElementType::Skills => self.titled_list(element, style, Some("skills-list")),
            ElementType::Languages => self.titled_list(element, style, Some("languages-list")),
            _ => self.titled_list(element, style, None),
        }
    }

    fn titled_list(&self, element: &Element, style: Option<String>, list_class: Option<&str>) -> Markup {
        self.section(element, style, html! {
            div class="section-title" { (element.content) }
            (bullet_list(&element.list_items, list_class))
        })
    }

    fn section(&self, element: &Element, style: Option<String>, inner: Markup) -> Markup {
        let marker = self
            .options
            .type_markers
            .then(|| element.element_type.as_str());
        html! {
            div class="section" style=[style] data-type=[marker] { (inner) }
        }
    }
}

fn bullet_list(items: &[String], class: Option<&str>) -> Markup {
    html! {
        ul class=[class] {
            @for item in items {
                li { (item) }
            }
        }
    }
}

/// `Company - Location` line; the separator only appears with a location.
fn org_line(class: &str, org: &str, location: &str) -> Markup {
    html! {
        div {
            span class=(class) { (org) }
            @if !location.is_empty() { " - " }
            span class="location" { (location) }
        }
    }
}
