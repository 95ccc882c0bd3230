//! # Snapshot Testing Support
//!
//! Utilities for testing the engine via snapshot assertions and invariant
//! checks.
//!
//! ## Modules
//!
//! - **`normalize`**: renders a `ParsedDoc` as stable text, one line per
//!   input line, for `insta` snapshots
//! - **`invariants`**: runtime checks for engine correctness (one record and
//!   one rendered line per input line, balanced emphasis tags, raw zones
//!   produce no inline markup)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
