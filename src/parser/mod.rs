//! Resume parsing module: HTML documents and JSON element models.

mod html_parser;
mod json;
mod options;

pub use html_parser::{parse_many, HtmlParser, ParsedResume};
pub use json::from_json;
pub use options::{ErrorMode, ParseOptions};
