use crate::parsing::grammar::LineKind;

/// Raised while compiling grammar tables. Never raised while parsing.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("Pattern for rule {rule} does not compile: {source}")]
    Pattern {
        rule: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },
    #[error("Replacement for rule {rule} references group {group}, but the pattern has {groups} groups")]
    Placeholder {
        rule: String,
        group: usize,
        groups: usize,
    },
    #[error("Rule {rule} renders its own match inline with $${group}")]
    InlineSelfReference { rule: String, group: usize },
    #[error("Rule {rule} is missing capture group {group}")]
    MissingGroup { rule: String, group: String },
    #[error("Grammar has no {kind} rule, which {required_by} requires")]
    MissingRule {
        kind: LineKind,
        required_by: LineKind,
    },
    #[error("Rule {rule} has an invalid opener")]
    Opener { rule: String },
    #[error("Unknown line type: {0}")]
    UnknownLineType(String),
    #[error("Inline grammar has no {0} rule")]
    MissingInlineRule(String),
    #[error("Unknown inline rule: {0}")]
    UnknownInlineRule(String),
}

/// Fatal failures during classification or rendering.
///
/// Unterminated brackets and unmatched delimiters are not errors; they
/// render as literal text.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Inline parser made no progress at byte {offset} (remaining: {remaining:?})")]
    Stalled { offset: usize, remaining: String },
    #[error("Rule {rule} failed while matching: {source}")]
    Match {
        rule: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },
}
