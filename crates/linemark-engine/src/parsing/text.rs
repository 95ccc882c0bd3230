//! Splitting buffers into lines.
//!
//! Lines never carry their terminator. A trailing terminator yields a final
//! empty line, matching what an editor shows.

use std::sync::LazyLock;

use regex::Regex;
use xi_rope::Rope;

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\r|\n").expect("line break pattern is valid"));

/// Splits on `\r\n`, `\r` or `\n`.
pub fn split_lines(text: &str) -> Vec<&str> {
    LINE_BREAK.split(text).collect()
}

/// Lines of a rope buffer.
pub fn rope_lines(rope: &Rope) -> Vec<String> {
    let text = rope.slice_to_cow(0..rope.len());
    split_lines(&text).into_iter().map(str::to_string).collect()
}
