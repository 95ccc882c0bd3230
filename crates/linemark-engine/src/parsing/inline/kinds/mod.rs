//! # Inline Kinds
//!
//! Inline constructs that are not driven by grammar patterns own their
//! delimiters and their markup here.
//!
//! ## Types
//!
//! - **`Emphasis`**: `STAR = '*'`, `UNDERSCORE = '_'`; em/strong markup
//! - **`LinkKind`**: link vs image, with the close bracket and label markup
//!
//! The parser calls these; it never hardcodes `*` or `]`.

pub mod emphasis;
pub mod link;

pub use emphasis::Emphasis;
pub use link::LinkKind;
