use crate::ParseError;
use crate::parsing::grammar::{InlineGrammar, InlineRule};
use crate::parsing::labels::LinkLabels;
use crate::parsing::template;

use super::{
    brackets::{BracketMatcher, MAX_NESTING},
    cursor::Cursor,
    delimiter::{DelimiterStack, Flanking},
    kinds::{Emphasis, LinkKind},
};

/// Renders one line's inline content to markup.
///
/// Without a label table every well-formed reference span becomes a link or
/// image. With one, only spans whose label is defined do.
#[derive(Clone, Copy)]
pub struct InlineParser<'a> {
    grammar: &'a InlineGrammar,
    labels: Option<&'a LinkLabels>,
    /// How many link or image texts enclose the text being rendered.
    depth: usize,
}

impl<'a> InlineParser<'a> {
    pub fn new(grammar: &'a InlineGrammar) -> Self {
        Self {
            grammar,
            labels: None,
            depth: 0,
        }
    }

    pub fn with_labels(grammar: &'a InlineGrammar, labels: &'a LinkLabels) -> Self {
        Self {
            grammar,
            labels: Some(labels),
            depth: 0,
        }
    }

    /// Renders `text`, resolving emphasis on a delimiter stack and links
    /// through the bracket matcher.
    ///
    /// # Precedence
    /// At each position: escape, code span, image/link, delimiter run, then
    /// the default single-character rule. Inside more than `MAX_NESTING`
    /// levels of link or image text, brackets fall to the default rule.
    ///
    /// # Errors
    /// `ParseError::Stalled` if no rule consumes input at some position,
    /// which only happens with a default rule that cannot match.
    pub fn render(&self, text: &str) -> Result<String, ParseError> {
        let nested = Self {
            depth: self.depth + 1,
            ..*self
        };
        let render = |inner: &str| nested.render(inner);
        let match_brackets = self.depth < MAX_NESTING;

        let mut cur = Cursor::new(text);
        let mut out = String::with_capacity(text.len());
        let mut stack = DelimiterStack::default();
        let mut brackets = BracketMatcher::new(text, self.grammar, self.labels);

        'outer: while !cur.eof() {
            for rule in self.grammar.atomic_rules() {
                if let Some(len) = self.apply(rule, &cur, &mut out, &render)? {
                    cur.bump_n(len);
                    continue 'outer;
                }
            }

            for (kind, rule) in [
                (LinkKind::Image, &self.grammar.image_open),
                (LinkKind::Link, &self.grammar.link_open),
            ] {
                if !match_brackets || rule.match_len(cur.rest())?.is_none() {
                    continue;
                }
                if let Some(found) = brackets.matches(cur.pos(), kind, &render)? {
                    out.push_str(&found.markup);
                    cur.bump_n(found.consumed);
                    continue 'outer;
                }
            }

            if let Some(delimiter) = cur.peek().filter(|&c| Emphasis::is_delimiter(c)) {
                let len = delimiter_run(&cur, delimiter, &mut stack, &mut out);
                cur.bump_n(len);
                continue;
            }

            if let Some(len) = self.apply(&self.grammar.default, &cur, &mut out, &render)? {
                cur.bump_n(len);
                continue;
            }

            return Err(ParseError::Stalled {
                offset: cur.pos(),
                remaining: cur.rest().to_string(),
            });
        }

        stack.flush_all(&mut out);
        Ok(out)
    }

    /// Expands `rule` at the cursor. Returns the length consumed.
    fn apply(
        &self,
        rule: &InlineRule,
        cur: &Cursor<'_>,
        out: &mut String,
        render: &dyn Fn(&str) -> Result<String, ParseError>,
    ) -> Result<Option<usize>, ParseError> {
        let Some(capture) = rule.captures(cur.rest())? else {
            return Ok(None);
        };
        out.push_str(&template::expand(&rule.replacement, &capture, render)?);
        Ok(Some(capture.matched_len()))
    }
}

/// Handles the delimiter run at the cursor. Returns its byte length.
fn delimiter_run(cur: &Cursor<'_>, delimiter: char, stack: &mut DelimiterStack, out: &mut String) -> usize {
    let len = cur.run_len(delimiter);
    let run = &cur.rest()[..len];
    let flanking = Flanking::of(delimiter, cur.prev(), cur.char_at(cur.pos() + len));

    let mut count = run.chars().count();
    if flanking.can_close {
        count = stack.close(delimiter, count, out);
    }
    if count > 0 && flanking.can_open {
        stack.push(delimiter, run, count, out);
        count = 0;
    }
    if count > 0 {
        out.push_str(&run[..count * delimiter.len_utf8()]);
    }
    len
}
