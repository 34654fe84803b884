//! The builder session state machine.

use log::{debug, info, warn};

use super::drag::{DragPayload, DragState, DropPosition};
use super::palette::Palette;
use crate::detect::ContentKind;
use crate::error::{Error, Result};
use crate::export::{TemplateRecord, TemplateStore};
use crate::model::{BuilderTemplate, Column, Element, ElementId, ElementType, StyleMap, TemplateType};
use crate::parser::{from_json, HtmlParser, ParseOptions};
use crate::render::{to_html, RenderOptions};

/// Text of a list item added from the property panel.
pub const NEW_LIST_ITEM: &str = "New item";

/// Observable state of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No elements
    Empty,
    /// At least one element, nothing selected
    Populated,
    /// One element is the target of property edits
    ElementSelected(ElementId),
}

/// An interactive editing session over one template.
///
/// Every transition runs to completion before returning. Mutations that
/// name a missing element, or an out-of-range list index, are no-ops and
/// return `false`.
#[derive(Debug, Clone)]
pub struct BuilderSession {
    template: BuilderTemplate,
    selected: Option<ElementId>,
    drag: DragState,
    palette: Palette,
    record_id: Option<String>,
}

impl BuilderSession {
    /// Start an empty session.
    pub fn new(name: impl Into<String>, template_type: TemplateType) -> Self {
        Self::from_template(BuilderTemplate::new(name, template_type))
    }

    /// Start a session over an existing template.
    pub fn from_template(template: BuilderTemplate) -> Self {
        Self {
            template,
            selected: None,
            drag: DragState::default(),
            palette: Palette::new(),
            record_id: None,
        }
    }

    /// Start a session by importing HTML.
    ///
    /// The layout is whatever the parser detects.
    pub fn from_html(name: impl Into<String>, html: &str, options: &ParseOptions) -> Result<Self> {
        let parsed = HtmlParser::with_options(options.clone()).parse(html)?;
        Ok(Self::from_template(parsed.into_template(name)))
    }

    /// Open a stored record for editing. Saving later updates that record.
    pub fn from_record(record: &TemplateRecord, options: &ParseOptions) -> Result<Self> {
        let mut session = match record.content_type {
            ContentKind::Json => {
                let mut template = from_json(&record.content)?;
                if template.name.is_empty() {
                    template.name = record.name.clone();
                }
                Self::from_template(template)
            }
            ContentKind::Html => Self::from_html(record.name.clone(), &record.content, options)?,
        };
        session.record_id = record.id.clone();
        Ok(session)
    }

    pub fn template(&self) -> &BuilderTemplate {
        &self.template
    }

    pub fn into_template(self) -> BuilderTemplate {
        self.template
    }

    pub fn elements(&self) -> &[Element] {
        &self.template.elements
    }

    pub fn name(&self) -> &str {
        &self.template.name
    }

    pub fn template_type(&self) -> TemplateType {
        self.template.template_type
    }

    /// Id of the stored record this session was opened from or saved to.
    pub fn record_id(&self) -> Option<&str> {
        self.record_id.as_deref()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn state(&self) -> SessionState {
        match &self.selected {
            Some(id) => SessionState::ElementSelected(id.clone()),
            None if self.template.is_empty() => SessionState::Empty,
            None => SessionState::Populated,
        }
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.template.name = name.into();
    }

    /// Register a custom section type on the palette.
    pub fn add_custom_section(&mut self, name: &str) -> bool {
        let added = self.palette.add_custom_section(name);
        if !added {
            debug!("Custom section {:?} not added", name);
        }
        added
    }

    // --- insertion and ordering ---

    /// Append a freshly seeded element.
    pub fn insert_from_palette(&mut self, element_type: ElementType) -> ElementId {
        let element = Element::new(element_type);
        let id = element.id.clone();
        debug!("Inserting {} as {}", element.element_type, id);
        self.template.elements.push(element);
        id
    }

    /// Insert a freshly seeded element next to `target_id`.
    pub fn insert_at(
        &mut self,
        element_type: ElementType,
        target_id: &ElementId,
        position: DropPosition,
    ) -> Option<ElementId> {
        self.reorder(
            DragPayload::Palette(Element::new(element_type)),
            target_id,
            position,
        )
    }

    /// Move an existing element next to `target_id`.
    pub fn move_element(
        &mut self,
        dragged_id: &ElementId,
        target_id: &ElementId,
        position: DropPosition,
    ) -> bool {
        self.reorder(DragPayload::Existing(dragged_id.clone()), target_id, position)
            .is_some()
    }

    /// Place the dragged element immediately before or after `target_id`.
    ///
    /// An element already in the sequence is moved; a palette element whose
    /// id is not in the sequence is inserted. The insertion index is
    /// computed after the dragged element has been removed. Returns the id
    /// of the placed element, or `None` when nothing changed.
    pub fn reorder(
        &mut self,
        dragged: DragPayload,
        target_id: &ElementId,
        position: DropPosition,
    ) -> Option<ElementId> {
        if self.template.position(target_id).is_none() {
            warn!("Drop target {} not found", target_id);
            return None;
        }
        if dragged.id() == target_id {
            debug!("Element {} dropped on itself", target_id);
            return None;
        }

        let element = match dragged {
            DragPayload::Existing(id) => self.detach(&id)?,
            DragPayload::Palette(element) => match self.template.position(&element.id) {
                Some(index) => self.template.elements.remove(index),
                None => element,
            },
        };

        let target_index = self.template.position(target_id)?;
        let index = match position {
            DropPosition::Before => target_index,
            DropPosition::After => target_index + 1,
        };

        let id = element.id.clone();
        debug!("Placing {} at index {}", id, index);
        self.template.elements.insert(index, element);
        Some(id)
    }

    fn detach(&mut self, id: &ElementId) -> Option<Element> {
        match self.template.position(id) {
            Some(index) => Some(self.template.elements.remove(index)),
            None => {
                warn!("Dragged element {} not found", id);
                None
            }
        }
    }

    // --- drag tracking ---

    /// Begin dragging a new element of `element_type` from the palette.
    pub fn drag_start_palette(&mut self, element_type: ElementType) {
        self.drag.start(DragPayload::Palette(Element::new(element_type)));
    }

    /// Begin dragging an element already in the template.
    pub fn drag_start_element(&mut self, id: &ElementId) -> bool {
        if self.template.position(id).is_none() {
            return false;
        }
        self.drag.start(DragPayload::Existing(id.clone()));
        true
    }

    /// Pointer moved over an element (or over empty editor space).
    pub fn drag_over(&mut self, target: Option<ElementId>) {
        self.drag.hover(target);
    }

    pub fn drag_leave(&mut self) {
        self.drag.hover(None);
    }

    /// Abandon the drag without touching the template.
    pub fn cancel_drag(&mut self) {
        self.drag.clear();
    }

    /// Commit the active drag.
    ///
    /// Without a target a palette element is appended and an existing one
    /// stays where it is.
    pub fn drop_on(&mut self, target: Option<(ElementId, DropPosition)>) -> Option<ElementId> {
        let payload = self.drag.take()?;
        match (target, payload) {
            (Some((target_id, position)), payload) => self.reorder(payload, &target_id, position),
            (None, DragPayload::Palette(element)) => {
                let id = element.id.clone();
                self.template.elements.push(element);
                Some(id)
            }
            (None, DragPayload::Existing(_)) => None,
        }
    }

    // --- selection ---

    pub fn select_element(&mut self, id: &ElementId) -> bool {
        if self.template.position(id).is_none() {
            debug!("Cannot select missing element {}", id);
            return false;
        }
        self.selected = Some(id.clone());
        true
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selected.as_ref().and_then(|id| self.template.get(id))
    }

    // --- property edits ---

    /// Replace an element's content; composite records are normalized.
    pub fn update_content(&mut self, id: &ElementId, text: impl Into<String>) -> bool {
        self.edit(id, |element| element.set_content(text))
    }

    pub fn update_column(&mut self, id: &ElementId, column: Column) -> bool {
        self.edit(id, |element| element.column = column)
    }

    /// Replace an element's whole style map.
    pub fn update_style(&mut self, id: &ElementId, styles: StyleMap) -> bool {
        self.edit(id, |element| element.styles = styles)
    }

    /// Set one style property, keeping the rest.
    pub fn set_style_property(
        &mut self,
        id: &ElementId,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> bool {
        self.edit(id, |element| element.styles.set(key, value))
    }

    pub fn add_list_item(&mut self, id: &ElementId) -> bool {
        self.edit(id, |element| element.list_items.push(NEW_LIST_ITEM.to_string()))
    }

    pub fn update_list_item(&mut self, id: &ElementId, index: usize, value: impl Into<String>) -> bool {
        let Some(item) = self
            .template
            .get_mut(id)
            .and_then(|element| element.list_items.get_mut(index))
        else {
            debug!("No list item {} on {}", index, id);
            return false;
        };
        *item = value.into();
        true
    }

    pub fn remove_list_item(&mut self, id: &ElementId, index: usize) -> bool {
        match self.template.get_mut(id) {
            Some(element) if index < element.list_items.len() => {
                element.list_items.remove(index);
                true
            }
            _ => {
                debug!("No list item {} on {}", index, id);
                false
            }
        }
    }

    /// Delete an element, clearing the selection if it was selected.
    pub fn remove_element(&mut self, id: &ElementId) -> Option<Element> {
        let index = self.template.position(id)?;
        let removed = self.template.elements.remove(index);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        if matches!(self.drag.payload(), Some(DragPayload::Existing(dragged)) if dragged == id) {
            self.drag.clear();
        }
        Some(removed)
    }

    fn edit(&mut self, id: &ElementId, f: impl FnOnce(&mut Element)) -> bool {
        match self.template.get_mut(id) {
            Some(element) => {
                f(element);
                true
            }
            None => {
                debug!("Edit ignored, element {} not found", id);
                false
            }
        }
    }

    // --- output ---

    pub fn generate_html(&self, options: &RenderOptions) -> String {
        to_html(&self.template, options)
    }

    /// Check that the template can be persisted.
    pub fn validate(&self) -> Result<()> {
        self.template.validate()
    }

    /// Persist the template as HTML.
    ///
    /// Fails with [`Error::MissingTemplateName`] before the store is
    /// contacted. A store failure leaves the session unchanged.
    pub fn save(&mut self, store: &mut dyn TemplateStore, options: &RenderOptions) -> Result<TemplateRecord> {
        if self.template.name.trim().is_empty() {
            return Err(Error::MissingTemplateName);
        }
        self.validate()?;

        let html = self.generate_html(options);
        let record = match &self.record_id {
            Some(id) => store.update(id, &self.template.name, &html)?,
            None => store.create(&self.template.name, &html)?,
        };

        info!(
            "Saved template {:?} ({} elements)",
            self.template.name,
            self.template.len()
        );
        self.record_id = record.id.clone();
        Ok(record)
    }
}
