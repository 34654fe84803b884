//! Interactive template editing.
//!
//! A [`BuilderSession`] owns one [`BuilderTemplate`](crate::model::BuilderTemplate)
//! and applies discrete user events to it: palette inserts, drag and drop,
//! selection and property edits. Drag state is carried by the session
//! itself, so an abandoned drag never reaches the template.

mod builder;
mod drag;
mod palette;

pub use builder::{BuilderSession, SessionState, NEW_LIST_ITEM};
pub use drag::{DragPayload, DragState, DropPosition};
pub use palette::Palette;
