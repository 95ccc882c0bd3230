use std::fmt;

use super::pattern::{Capture, Pattern};

/// Semantic type of a single line.
///
/// The tag (`TMH1`, `TMPara`, ...) is what the editing surface uses as a
/// styling key, so it doubles as the serialized name in grammar files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LineKind {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Blockquote,
    CodeFenceBacktickOpen,
    CodeFenceTildeOpen,
    CodeFenceBacktickClose,
    CodeFenceTildeClose,
    FencedCodeBacktick,
    FencedCodeTilde,
    BlankLine,
    SetextH1Marker,
    SetextH2Marker,
    SetextH1,
    SetextH2,
    Hr,
    Ul,
    Ol,
    IndentedCode,
    LinkReferenceDefinition,
    Para,
}

impl LineKind {
    pub const ALL: [LineKind; 24] = [
        LineKind::H1,
        LineKind::H2,
        LineKind::H3,
        LineKind::H4,
        LineKind::H5,
        LineKind::H6,
        LineKind::Blockquote,
        LineKind::CodeFenceBacktickOpen,
        LineKind::CodeFenceTildeOpen,
        LineKind::CodeFenceBacktickClose,
        LineKind::CodeFenceTildeClose,
        LineKind::FencedCodeBacktick,
        LineKind::FencedCodeTilde,
        LineKind::BlankLine,
        LineKind::SetextH1Marker,
        LineKind::SetextH2Marker,
        LineKind::SetextH1,
        LineKind::SetextH2,
        LineKind::Hr,
        LineKind::Ul,
        LineKind::Ol,
        LineKind::IndentedCode,
        LineKind::LinkReferenceDefinition,
        LineKind::Para,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            LineKind::H1 => "TMH1",
            LineKind::H2 => "TMH2",
            LineKind::H3 => "TMH3",
            LineKind::H4 => "TMH4",
            LineKind::H5 => "TMH5",
            LineKind::H6 => "TMH6",
            LineKind::Blockquote => "TMBlockquote",
            LineKind::CodeFenceBacktickOpen => "TMCodeFenceBacktickOpen",
            LineKind::CodeFenceTildeOpen => "TMCodeFenceTildeOpen",
            LineKind::CodeFenceBacktickClose => "TMCodeFenceBacktickClose",
            LineKind::CodeFenceTildeClose => "TMCodeFenceTildeClose",
            LineKind::FencedCodeBacktick => "TMFencedCodeBacktick",
            LineKind::FencedCodeTilde => "TMFencedCodeTilde",
            LineKind::BlankLine => "TMBlankLine",
            LineKind::SetextH1Marker => "TMSetextH1Marker",
            LineKind::SetextH2Marker => "TMSetextH2Marker",
            LineKind::SetextH1 => "TMSetextH1",
            LineKind::SetextH2 => "TMSetextH2",
            LineKind::Hr => "TMHR",
            LineKind::Ul => "TMUL",
            LineKind::Ol => "TMOL",
            LineKind::IndentedCode => "TMIndentedCode",
            LineKind::LinkReferenceDefinition => "TMLinkReferenceDefinition",
            LineKind::Para => "TMPara",
        }
    }

    pub fn from_tag(tag: &str) -> Option<LineKind> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// The heading type a valid setext marker assigns to the paragraph above it.
    pub fn setext_heading(self) -> Option<LineKind> {
        match self {
            LineKind::SetextH1Marker => Some(LineKind::SetextH1),
            LineKind::SetextH2Marker => Some(LineKind::SetextH2),
            _ => None,
        }
    }

    pub fn is_fence_close(self) -> bool {
        matches!(
            self,
            LineKind::CodeFenceBacktickClose | LineKind::CodeFenceTildeClose
        )
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Uncompiled line rule, as written in the built-in table or a grammar file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRuleSpec<'a> {
    pub kind: LineKind,
    pub pattern: &'a str,
    pub replacement: &'a str,
    /// Set on closing fence rules: the opener they close.
    pub opener: Option<LineKind>,
    /// Capture group holding the label of a link reference definition.
    pub label_group: Option<usize>,
}

/// A compiled line rule.
#[derive(Debug, Clone)]
pub struct LineRule {
    pub kind: LineKind,
    pub pattern: Pattern,
    pub replacement: String,
    pub opener: Option<LineKind>,
    pub label_group: Option<usize>,
    /// Index of the `seq` group on fence rules.
    pub(crate) fence_group: Option<usize>,
}

impl LineRule {
    /// Closing rules only take part in the open-fence continuation check.
    pub fn is_closing(&self) -> bool {
        self.opener.is_some()
    }

    pub fn captures(&self, line: &str) -> Result<Option<Capture>, crate::ParseError> {
        self.pattern.captures(self.kind.tag(), line)
    }

    /// Length in characters of the fence run captured by a fence rule.
    pub fn fence_len(&self, capture: &Capture) -> Option<usize> {
        self.fence_group.map(|g| capture.get(g).chars().count())
    }
}
