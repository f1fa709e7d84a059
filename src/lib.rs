//! tagscan - comment-tag recognition engine
//!
//! Scans source-code text and classifies substrings as tagged comments
//! (lines or comment blocks beginning with markers such as `!`, `?`, `//`,
//! `todo`, `*`) so a host editor can visually distinguish them. The host
//! supplies the document text, a language identifier, and the tag
//! configuration; the engine returns, per tag, the exact byte ranges to
//! decorate.
//!
//! ```
//! use tagscan::{Highlighter, Settings};
//!
//! let highlighter = Highlighter::new(Settings::default()).unwrap();
//! let text = "// todo: wire up the renderer";
//! let result = highlighter.scan("rust", text).unwrap();
//! let ranges = result.ranges_for("todo").unwrap();
//! assert_eq!(ranges[0].text(text), "todo: wire up the renderer");
//! ```

mod config;
mod error;
mod grammar;
mod highlighter;
mod languages;
mod scanner;
mod style;
mod tags;

pub use config::Settings;
pub use error::{Result, ScanError};
pub use grammar::CommentGrammar;
pub use highlighter::{Highlighter, ScanResult, TagRanges};
pub use scanner::{find_block_tags, find_doc_tags, find_line_tags, TagMatches};
pub use style::{Span, TagStyle};
pub use tags::{Tag, TagDefinition, TagRegistry};
