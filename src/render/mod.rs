//! Rendering module for turning templates into HTML documents and JSON.

mod html;
mod json;
mod options;
pub mod stylesheet;

pub use html::{to_html, HtmlGenerator};
pub use json::{to_json, JsonFormat};
pub use options::{RenderOptions, DEFAULT_TITLE};
