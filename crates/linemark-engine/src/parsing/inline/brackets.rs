//! Link and image bracket matching.
//!
//! Finds the `]` that closes a `[` or `![` opener and works out which
//! reference form follows it. Rendering the link text is left to a closure
//! supplied by the caller, so the recursion back into the inline parser is
//! visible at the call site.

use std::collections::HashMap;
use std::ops::Range;

use super::kinds::LinkKind;
use crate::ParseError;
use crate::parsing::grammar::{Capture, InlineGrammar, InlineRule};
use crate::parsing::labels::LinkLabels;
use crate::parsing::template;

/// Link and image text renders at most this many levels deep. Openers
/// past it stay literal.
pub const MAX_NESTING: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// `[text][label]`
    Full(Range<usize>),
    /// `[text][]`
    Collapsed,
    /// `[text]`
    Shortcut,
}

/// A syntactically valid span. Ranges are byte offsets into the matcher's
/// text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketSpan {
    pub kind: LinkKind,
    pub opener: Range<usize>,
    pub text: Range<usize>,
    pub reference: Reference,
    /// Offset just past the span.
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketMatch {
    pub markup: String,
    /// Bytes consumed from the match start.
    pub consumed: usize,
}

/// Where the text of an opener ends.
#[derive(Debug, Clone, Copy)]
struct Close {
    /// Offset of the closing `]`.
    at: usize,
    /// A valid link opens somewhere inside the text.
    holds_link: bool,
}

#[derive(Debug)]
struct Opener {
    kind: LinkKind,
    start: usize,
    text_start: usize,
    holds_link: bool,
}

/// Matches brackets within one string for the duration of one render.
///
/// With `labels`, a span only matches when its label is defined. Without,
/// every syntactically valid span matches.
///
/// Closing brackets are found by one pass over the text, keyed by the
/// offset where an opener's text starts. A `None` entry is an opener that
/// never closes.
pub struct BracketMatcher<'a> {
    text: &'a str,
    grammar: &'a InlineGrammar,
    labels: Option<&'a LinkLabels>,
    closes: HashMap<usize, Option<Close>>,
}

impl<'a> BracketMatcher<'a> {
    pub fn new(text: &'a str, grammar: &'a InlineGrammar, labels: Option<&'a LinkLabels>) -> Self {
        Self {
            text,
            grammar,
            labels,
            closes: HashMap::new(),
        }
    }

    /// Matches a span opening at `start` and renders it, calling `render`
    /// for the link text.
    pub fn matches(
        &mut self,
        start: usize,
        kind: LinkKind,
        render: &dyn Fn(&str) -> Result<String, ParseError>,
    ) -> Result<Option<BracketMatch>, ParseError> {
        let Some(span) = self.span(start, kind)? else {
            return Ok(None);
        };

        let rule = self.opener(kind);
        let capture = Capture::from(vec![
            self.text[span.opener.clone()].to_string(),
            self.text[span.text.clone()].to_string(),
        ]);
        let mut markup = template::expand(&rule.replacement, &capture, render)?;
        match &span.reference {
            Reference::Full(label) => markup.push_str(&kind.label_markup(&self.text[label.clone()])),
            Reference::Collapsed => markup.push_str(&kind.label_markup("")),
            Reference::Shortcut => {}
        }

        Ok(Some(BracketMatch {
            markup,
            consumed: span.end - start,
        }))
    }

    /// Finds the span opening at `start`, if it is a valid one.
    pub fn span(&mut self, start: usize, kind: LinkKind) -> Result<Option<BracketSpan>, ParseError> {
        let Some(opener_len) = self.opener(kind).match_len(&self.text[start..])? else {
            return Ok(None);
        };

        let text_start = start + opener_len;
        if !self.closes.contains_key(&text_start) {
            self.scan(Opener {
                kind,
                start,
                text_start,
                holds_link: false,
            })?;
        }
        let Some(close) = self.closes.get(&text_start).copied().flatten() else {
            return Ok(None);
        };
        Ok(self.validate(kind, start..text_start, close))
    }

    fn opener(&self, kind: LinkKind) -> &'a InlineRule {
        match kind {
            LinkKind::Link => &self.grammar.link_open,
            LinkKind::Image => &self.grammar.image_open,
        }
    }

    /// Records the close of `first` and of every opener after it.
    ///
    /// Openers nest on a stack. When one closes, whether it is a valid link
    /// propagates to the opener below, so an outer link learns about inner
    /// links without re-scanning.
    fn scan(&mut self, first: Opener) -> Result<(), ParseError> {
        let (text, grammar) = (self.text, self.grammar);
        let mut pos = first.text_start;
        let mut open = vec![first];

        'scan: while pos < text.len() {
            let rest = &text[pos..];

            for rule in grammar.atomic_rules() {
                if let Some(len) = rule.match_len(rest)? {
                    pos += len;
                    continue 'scan;
                }
            }

            for kind in [LinkKind::Image, LinkKind::Link] {
                if let Some(len) = self.opener(kind).match_len(rest)? {
                    open.push(Opener {
                        kind,
                        start: pos,
                        text_start: pos + len,
                        holds_link: false,
                    });
                    pos += len;
                    continue 'scan;
                }
            }

            let Some(c) = rest.chars().next() else {
                break;
            };
            if c == LinkKind::CLOSE
                && let Some(opener) = open.pop()
            {
                let close = Close {
                    at: pos,
                    holds_link: opener.holds_link,
                };
                let is_link = opener.kind == LinkKind::Link
                    && self
                        .validate(opener.kind, opener.start..opener.text_start, close)
                        .is_some();
                if let Some(parent) = open.last_mut() {
                    parent.holds_link |= opener.holds_link || is_link;
                }
                self.closes.entry(opener.text_start).or_insert(Some(close));
            }
            pos += c.len_utf8();
        }

        for opener in open {
            self.closes.entry(opener.text_start).or_insert(None);
        }
        Ok(())
    }

    /// Checks a closed opener. Its text must be non-empty and hold no link,
    /// and its label must be defined when resolving.
    fn validate(&self, kind: LinkKind, opener: Range<usize>, close: Close) -> Option<BracketSpan> {
        let text_start = opener.end;
        if close.at == text_start || (kind == LinkKind::Link && close.holds_link) {
            return None;
        }

        let after_close = close.at + LinkKind::CLOSE.len_utf8();
        let (reference, end) = self.reference(after_close);
        let label = match &reference {
            Reference::Full(range) => &self.text[range.clone()],
            Reference::Collapsed | Reference::Shortcut => &self.text[text_start..close.at],
        };
        if let Some(labels) = self.labels
            && !labels.contains(label)
        {
            log::trace!("undefined reference label {label:?}");
            return None;
        }

        Some(BracketSpan {
            kind,
            opener,
            text: text_start..close.at,
            reference,
            end,
        })
    }

    /// Reads the reference form after the closing bracket at `at`.
    fn reference(&self, at: usize) -> (Reference, usize) {
        let rest = &self.text[at..];
        if !rest.starts_with(LinkKind::LABEL_OPEN) {
            return (Reference::Shortcut, at);
        }

        let label_start = at + LinkKind::LABEL_OPEN.len_utf8();
        let mut chars = self.text[label_start..].char_indices();
        while let Some((offset, c)) = chars.next() {
            match c {
                LinkKind::ESCAPE => {
                    chars.next();
                }
                LinkKind::LABEL_OPEN => break,
                LinkKind::CLOSE => {
                    let label_end = label_start + offset;
                    let end = label_end + LinkKind::CLOSE.len_utf8();
                    if label_end == label_start {
                        return (Reference::Collapsed, end);
                    }
                    return (Reference::Full(label_start..label_end), end);
                }
                _ => {}
            }
        }
        (Reference::Shortcut, at)
    }
}
