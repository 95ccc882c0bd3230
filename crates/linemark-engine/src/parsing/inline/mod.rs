//! # Inline Parsing
//!
//! Cursor-based rendering of one line's inline content to markup.
//!
//! ## Architecture
//!
//! The parser walks a cursor over the text and emits markup as it goes.
//! Emphasis cannot be emitted eagerly, since an opener is only known to be
//! an opener once its closer shows up; openers wait on a `DelimiterStack`
//! that owns the output accumulated before them.
//!
//! ## Modules
//!
//! - **`cursor`**: `Cursor` over the line with access to neighbouring chars
//! - **`kinds`**: `Emphasis` and `LinkKind`, owning delimiters and markup
//! - **`delimiter`**: flanking rules and the delimiter stack
//! - **`brackets`**: `BracketMatcher` for reference links and images
//! - **`parser`**: `InlineParser::render`
//!
//! ## Raw Zone Precedence
//!
//! Escapes and code spans bind tightest: `` `[not a link]` `` is a code span,
//! and `\]` never closes a link.

pub mod brackets;
pub mod cursor;
pub mod delimiter;
pub mod kinds;
pub mod parser;

pub use brackets::{BracketMatch, BracketMatcher};
pub use parser::InlineParser;
