//! Delimiter runs and the stack that resolves them into emphasis.

use std::sync::LazyLock;

use regex::Regex;

use super::kinds::Emphasis;

static UNICODE_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{P}$").expect("punctuation pattern is valid"));

pub fn is_punctuation(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_punctuation();
    }
    let mut buf = [0u8; 4];
    UNICODE_PUNCTUATION.is_match(c.encode_utf8(&mut buf))
}

/// Whether a delimiter run may open and/or close emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flanking {
    pub can_open: bool,
    pub can_close: bool,
}

impl Flanking {
    /// Classifies a run from its neighbours in the original input. `None`
    /// is the start or end of the line and counts as whitespace.
    pub fn of(delimiter: char, before: Option<char>, after: Option<char>) -> Self {
        let whitespace_before = before.is_none_or(char::is_whitespace);
        let whitespace_after = after.is_none_or(char::is_whitespace);
        let punctuation_before = before.is_some_and(is_punctuation);
        let punctuation_after = after.is_some_and(is_punctuation);

        let mut can_open =
            !whitespace_after && (!punctuation_after || whitespace_before || punctuation_before);
        let mut can_close =
            !whitespace_before && (!punctuation_before || whitespace_after || punctuation_after);

        // intraword `_` never opens or closes
        if delimiter == Emphasis::UNDERSCORE && can_open && can_close {
            can_open = punctuation_before;
            can_close = punctuation_after;
        }

        Self {
            can_open,
            can_close,
        }
    }
}

/// An opener waiting for its closer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterEntry {
    pub delimiter: char,
    /// The run as written.
    pub run: String,
    /// Delimiters not yet used by a closer.
    pub remaining: usize,
    /// Output accumulated before this run was pushed.
    pub output_before: String,
}

impl DelimiterEntry {
    /// The unused delimiters as literal text.
    fn literal(&self) -> &str {
        self.run.get(..self.remaining).unwrap_or(&self.run)
    }
}

/// Owned per-render stack of openers.
///
/// The output accumulator belongs to the caller. Pushing hands the current
/// accumulator to the new entry; resolving and flushing prepend saved
/// output back onto it.
#[derive(Debug, Default)]
pub struct DelimiterStack {
    entries: Vec<DelimiterEntry>,
}

impl DelimiterStack {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Closes as much of a run of `count` delimiters as the stack allows.
    /// Returns how many are left over.
    pub fn close(&mut self, delimiter: char, mut count: usize, output: &mut String) -> usize {
        let mut pointer = self.entries.len();

        while count > 0 && pointer > 0 {
            let index = pointer - 1;
            if self.entries[index].delimiter != delimiter {
                pointer -= 1;
                continue;
            }

            self.flush_above(index, output);

            let entry = &mut self.entries[index];
            let width = if count >= 2 && entry.remaining >= 2 { 2 } else { 1 };
            *output = Emphasis::wrap(delimiter, width, output);
            count -= width;
            entry.remaining -= width;

            if entry.remaining == 0 {
                if let Some(entry) = self.entries.pop() {
                    output.insert_str(0, &entry.output_before);
                }
                pointer -= 1;
            }
        }
        count
    }

    /// Pushes an opener. The accumulated output moves into the entry.
    pub fn push(&mut self, delimiter: char, run: &str, remaining: usize, output: &mut String) {
        self.entries.push(DelimiterEntry {
            delimiter,
            run: run.to_string(),
            remaining,
            output_before: std::mem::take(output),
        });
    }

    /// Pops every entry above `index` back into literal text.
    fn flush_above(&mut self, index: usize, output: &mut String) {
        while self.entries.len() > index + 1 {
            if let Some(entry) = self.entries.pop() {
                unwind(entry, output);
            }
        }
    }

    /// Pops everything as literal text, e.g. at end of line.
    pub fn flush_all(&mut self, output: &mut String) {
        while let Some(entry) = self.entries.pop() {
            unwind(entry, output);
        }
    }
}

fn unwind(entry: DelimiterEntry, output: &mut String) {
    let literal = entry.literal().to_string();
    let mut restored = entry.output_before;
    restored.push_str(&literal);
    restored.push_str(output);
    *output = restored;
}
