//! Replacement template expansion.
//!
//! Templates are plain markup with two placeholder forms:
//! - `$N`: capture group `N`, HTML-escaped
//! - `$$N`: capture group `N`, rendered through the inline parser
//!
//! Expansion is a single left-to-right pass. Output produced for one
//! placeholder is never re-scanned, so a literal `$1` in user text stays
//! literal.

use std::sync::LazyLock;

use regex::Regex;

use super::grammar::Capture;
use crate::ParseError;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\$)?([0-9])").expect("placeholder pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub group: usize,
    /// `$$N` rather than `$N`.
    pub inline: bool,
}

pub fn placeholders(template: &str) -> impl Iterator<Item = Placeholder> + '_ {
    PLACEHOLDER.captures_iter(template).map(|caps| Placeholder {
        group: digit(&caps[2]),
        inline: caps.get(1).is_some(),
    })
}

/// Expands `template` against `capture`, calling `render` for `$$N`.
pub fn expand<F>(template: &str, capture: &Capture, mut render: F) -> Result<String, ParseError>
where
    F: FnMut(&str) -> Result<String, ParseError>,
{
    let mut out = String::with_capacity(template.len() + capture.matched_len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&template[last..whole.start()]);

        let text = capture.get(digit(&caps[2]));
        if caps.get(1).is_some() {
            out.push_str(&render(text)?);
        } else {
            out.push_str(&html_escape::encode_text(text));
        }
        last = whole.end();
    }

    out.push_str(&template[last..]);
    Ok(out)
}

fn digit(s: &str) -> usize {
    s.bytes().next().map_or(0, |b| usize::from(b - b'0'))
}
