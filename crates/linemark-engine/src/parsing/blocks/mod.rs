//! # Block Parsing
//!
//! Flat, line-by-line classification. There is no container nesting: every
//! line gets exactly one [`LineKind`](crate::parsing::grammar::LineKind).
//!
//! ## Phases
//!
//! 1. **Forward scan** (`classify`): each line is matched against the line
//!    grammar. An open fence takes precedence over the rule scan, and
//!    setext markers are validated against the record just above them.
//! 2. **Setext patch** (`setext`): paragraph runs above valid markers are
//!    rewritten as heading content.
//!
//! ## Modules
//!
//! - **`classify`**: `LineClassifier` and the `LineRecord` it produces
//! - **`setext`**: the backward patch pass
//! - **`kinds`**: fence bookkeeping (`FenceKind`, `OpenFence`)
//!
//! ## Key Invariants
//!
//! - Classification is deterministic and depends only on the lines and
//!   earlier records, apart from the setext patch
//! - Fenced code lines are raw zones: no rule scan and no inline parsing

pub mod classify;
pub mod kinds;
pub mod setext;

pub use classify::{INLINE_LINE, LineClassifier, LineRecord, RAW_LINE};
pub use kinds::{FenceKind, OpenFence};
