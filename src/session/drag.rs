//! Drag-and-drop tracking for the builder session.
//!
//! A drag is a sequence of discrete events: start, any number of hovers,
//! then either a drop (which commits) or a cancel (which leaves the
//! template untouched).

use crate::model::{Element, ElementId};

/// Where a dropped element lands relative to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPosition {
    Before,
    After,
}

impl DropPosition {
    /// Split a target box at its vertical midpoint.
    ///
    /// `pointer_y` and `top` share a coordinate space; `height` is the
    /// target's rendered height.
    pub fn from_pointer(pointer_y: f64, top: f64, height: f64) -> Self {
        if pointer_y - top < height / 2.0 {
            Self::Before
        } else {
            Self::After
        }
    }
}

/// What is being dragged.
#[derive(Debug, Clone, PartialEq)]
pub enum DragPayload {
    /// A freshly seeded element from the palette, not yet in the template
    Palette(Element),
    /// An element already in the template
    Existing(ElementId),
}

impl DragPayload {
    /// Id of the dragged element.
    pub fn id(&self) -> &ElementId {
        match self {
            Self::Palette(element) => &element.id,
            Self::Existing(id) => id,
        }
    }
}

/// In-flight drag, carried explicitly by the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    payload: Option<DragPayload>,
    hover: Option<ElementId>,
}

impl DragState {
    pub(crate) fn start(&mut self, payload: DragPayload) {
        self.payload = Some(payload);
        self.hover = None;
    }

    pub(crate) fn hover(&mut self, target: Option<ElementId>) {
        if self.payload.is_some() {
            self.hover = target;
        }
    }

    pub(crate) fn take(&mut self) -> Option<DragPayload> {
        self.hover = None;
        self.payload.take()
    }

    pub(crate) fn clear(&mut self) {
        self.payload = None;
        self.hover = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.payload.is_some()
    }

    pub fn payload(&self) -> Option<&DragPayload> {
        self.payload.as_ref()
    }

    /// Element currently hovered by the drag, for drop highlighting.
    pub fn hover_target(&self) -> Option<&ElementId> {
        self.hover.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementType;

    #[test]
    fn test_drop_position_midpoint() {
        assert_eq!(DropPosition::from_pointer(110.0, 100.0, 40.0), DropPosition::Before);
        assert_eq!(DropPosition::from_pointer(120.0, 100.0, 40.0), DropPosition::After);
        assert_eq!(DropPosition::from_pointer(139.0, 100.0, 40.0), DropPosition::After);
    }

    #[test]
    fn test_hover_requires_active_drag() {
        let mut drag = DragState::default();
        drag.hover(Some("a".into()));
        assert!(drag.hover_target().is_none());

        let element = Element::new(ElementType::Awards);
        let id = element.id.clone();
        drag.start(DragPayload::Palette(element));
        drag.hover(Some("a".into()));
        assert_eq!(drag.hover_target().map(ElementId::as_str), Some("a"));

        let payload = drag.take().unwrap();
        assert_eq!(payload.id(), &id);
        assert!(!drag.is_dragging());
        assert!(drag.hover_target().is_none());
    }
}
