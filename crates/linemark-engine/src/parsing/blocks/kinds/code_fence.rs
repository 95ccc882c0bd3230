use crate::parsing::grammar::{Capture, LineKind, LineRule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    /// The fence a line of this kind opens, if any.
    pub fn opened_by(kind: LineKind) -> Option<FenceKind> {
        match kind {
            LineKind::CodeFenceBacktickOpen => Some(FenceKind::Backticks),
            LineKind::CodeFenceTildeOpen => Some(FenceKind::Tildes),
            _ => None,
        }
    }

    pub fn opener(self) -> LineKind {
        match self {
            FenceKind::Backticks => LineKind::CodeFenceBacktickOpen,
            FenceKind::Tildes => LineKind::CodeFenceTildeOpen,
        }
    }

    /// Line type of code lines inside the fence.
    pub fn body(self) -> LineKind {
        match self {
            FenceKind::Backticks => LineKind::FencedCodeBacktick,
            FenceKind::Tildes => LineKind::FencedCodeTilde,
        }
    }
}

/// A fence that has been opened and not yet closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenFence {
    pub kind: FenceKind,
    /// Length of the opening run; a closer must be at least this long.
    pub len: usize,
}

impl OpenFence {
    pub fn open(rule: &LineRule, capture: &Capture) -> Option<OpenFence> {
        Some(OpenFence {
            kind: FenceKind::opened_by(rule.kind)?,
            len: rule.fence_len(capture)?,
        })
    }

    pub fn closes(&self, closing_len: usize) -> bool {
        closing_len >= self.len
    }
}
