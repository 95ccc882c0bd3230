pub mod error;
pub mod parsing;

// Re-export key types for easier usage
pub use error::{GrammarError, ParseError};
pub use parsing::{
    ParsedDoc, RenderedLine,
    blocks::{LineClassifier, LineRecord},
    grammar::{Capture, Grammar, InlineRuleSpec, LineKind, LineRuleSpec},
    inline::InlineParser,
    labels::{LinkDefinition, LinkLabels},
    parse_document, parse_rope, parse_text, render_line,
};
