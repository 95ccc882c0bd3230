use crate::ParseError;
use crate::parsing::grammar::{Capture, Grammar, LineKind, LineRule};

use super::{
    kinds::OpenFence,
    setext::{self, SetextMarker},
};

/// Replacement for lines rendered inline as a whole.
pub const INLINE_LINE: &str = "$$0";
/// Replacement for lines rendered raw (escaped, no inline parsing).
pub const RAW_LINE: &str = "$0";

/// Classification of one line: its type, the captured substrings and the
/// template that renders them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord<'g> {
    pub kind: LineKind,
    pub capture: Capture,
    pub replacement: &'g str,
}

impl<'g> LineRecord<'g> {
    fn from_rule(rule: &'g LineRule, capture: Capture) -> Self {
        Self {
            kind: rule.kind,
            capture,
            replacement: &rule.replacement,
        }
    }

    /// A whole-line record rendered inline (paragraphs, setext content).
    pub fn inline(kind: LineKind, line: &str) -> Self {
        Self {
            kind,
            capture: Capture::whole(line),
            replacement: INLINE_LINE,
        }
    }

    pub fn paragraph(line: &str) -> Self {
        Self::inline(LineKind::Para, line)
    }

    fn raw(kind: LineKind, line: &str) -> Self {
        Self {
            kind,
            capture: Capture::whole(line),
            replacement: RAW_LINE,
        }
    }
}

/// Assigns a [`LineRecord`] to every line of a document.
///
/// Runs forward over the lines, where each line depends only on records
/// already produced, then applies the setext patch pass.
pub struct LineClassifier<'g> {
    grammar: &'g Grammar,
}

impl<'g> LineClassifier<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self { grammar }
    }

    pub fn classify<S: AsRef<str>>(&self, lines: &[S]) -> Result<Vec<LineRecord<'g>>, ParseError> {
        let mut records: Vec<LineRecord<'g>> = Vec::with_capacity(lines.len());
        let mut markers = Vec::new();
        let mut fence: Option<OpenFence> = None;

        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();

            let (record, next_fence) = match fence {
                Some(open) => self.continue_fence(open, line)?,
                None => self.scan_rules(line)?,
            };
            fence = next_fence;

            let record = if record.kind == LineKind::SetextH2Marker {
                self.prefer_list_item(record, line)?
            } else {
                record
            };

            let record = match record.kind.setext_heading() {
                Some(heading) => {
                    let follows_paragraph = index
                        .checked_sub(1)
                        .is_some_and(|prev| records[prev].kind == LineKind::Para);
                    if follows_paragraph {
                        markers.push(SetextMarker {
                            line: index,
                            heading,
                        });
                        record
                    } else {
                        self.demote_setext_marker(line)?
                    }
                }
                None => record,
            };

            records.push(record);
        }

        setext::apply(&mut records, lines, &markers);
        Ok(records)
    }

    /// Inside a fence: either the closing line or another code line.
    fn continue_fence(
        &self,
        open: OpenFence,
        line: &str,
    ) -> Result<(LineRecord<'g>, Option<OpenFence>), ParseError> {
        if let Some(rule) = self.grammar.closing_rule(open.kind.opener())
            && let Some(capture) = rule.captures(line)?
            && rule.fence_len(&capture).is_some_and(|len| open.closes(len))
        {
            return Ok((LineRecord::from_rule(rule, capture), None));
        }
        Ok((LineRecord::raw(open.kind.body(), line), Some(open)))
    }

    /// First matching non-closing rule, or a paragraph.
    fn scan_rules(&self, line: &str) -> Result<(LineRecord<'g>, Option<OpenFence>), ParseError> {
        for rule in self.grammar.line_rules() {
            if rule.is_closing() {
                continue;
            }
            if let Some(capture) = rule.captures(line)? {
                let fence = OpenFence::open(rule, &capture);
                return Ok((LineRecord::from_rule(rule, capture), fence));
            }
        }
        Ok((LineRecord::paragraph(line), None))
    }

    /// A `-` line shaped like an empty list item is a list item.
    fn prefer_list_item(&self, record: LineRecord<'g>, line: &str) -> Result<LineRecord<'g>, ParseError> {
        Ok(self.try_rule(LineKind::Ul, line)?.unwrap_or(record))
    }

    /// A setext marker with no paragraph above is a rule if it can be, or text.
    fn demote_setext_marker(&self, line: &str) -> Result<LineRecord<'g>, ParseError> {
        Ok(self
            .try_rule(LineKind::Hr, line)?
            .unwrap_or_else(|| LineRecord::paragraph(line)))
    }

    fn try_rule(&self, kind: LineKind, line: &str) -> Result<Option<LineRecord<'g>>, ParseError> {
        let Some(rule) = self.grammar.rule(kind) else {
            return Ok(None);
        };
        Ok(rule
            .captures(line)?
            .map(|capture| LineRecord::from_rule(rule, capture)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn kinds(lines: &[&str]) -> Vec<LineKind> {
        let grammar = Grammar::standard().unwrap();
        LineClassifier::new(&grammar)
            .classify(lines)
            .unwrap()
            .into_iter()
            .map(|r| r.kind)
            .collect()
    }

    #[rstest]
    #[case("# Title", LineKind::H1)]
    #[case("###### Six", LineKind::H6)]
    #[case("#######", LineKind::Para)]
    #[case("#hashtag", LineKind::Para)]
    #[case("> quoted", LineKind::Blockquote)]
    #[case("```rust", LineKind::CodeFenceBacktickOpen)]
    #[case("~~~", LineKind::CodeFenceTildeOpen)]
    #[case("", LineKind::BlankLine)]
    #[case("   \t", LineKind::BlankLine)]
    #[case("***", LineKind::Hr)]
    #[case("_ _ _", LineKind::Hr)]
    #[case("- item", LineKind::Ul)]
    #[case("+ item", LineKind::Ul)]
    #[case("12. item", LineKind::Ol)]
    #[case("3) item", LineKind::Ol)]
    #[case("    code", LineKind::IndentedCode)]
    #[case("[foo]: /url", LineKind::LinkReferenceDefinition)]
    #[case("plain text", LineKind::Para)]
    fn single_line(#[case] line: &str, #[case] expected: LineKind) {
        assert_eq!(kinds(&[line]), vec![expected]);
    }

    #[test]
    fn setext_h1_rewrites_paragraph() {
        assert_eq!(
            kinds(&["Title", "====="]),
            vec![LineKind::SetextH1, LineKind::SetextH1Marker]
        );
    }

    #[test]
    fn setext_h2_rewrites_whole_paragraph_run() {
        assert_eq!(
            kinds(&["", "one", "two", "---"]),
            vec![
                LineKind::BlankLine,
                LineKind::SetextH2,
                LineKind::SetextH2,
                LineKind::SetextH2Marker
            ]
        );
    }

    #[test]
    fn setext_marker_without_paragraph_becomes_rule_or_text() {
        assert_eq!(kinds(&["---"]), vec![LineKind::Hr]);
        assert_eq!(kinds(&["==="]), vec![LineKind::Para]);
        assert_eq!(
            kinds(&["# Head", "==="]),
            vec![LineKind::H1, LineKind::Para]
        );
    }

    #[test]
    fn second_marker_does_not_extend_heading() {
        assert_eq!(
            kinds(&["Title", "===", "==="]),
            vec![LineKind::SetextH1, LineKind::SetextH1Marker, LineKind::Para]
        );
    }

    #[test]
    fn empty_list_item_beats_setext_marker() {
        assert_eq!(
            kinds(&["Text", "- "]),
            vec![LineKind::Para, LineKind::Ul]
        );
    }

    #[test]
    fn fenced_code_body_and_close() {
        assert_eq!(
            kinds(&["```", "# not a heading", "*x*", "```", "after"]),
            vec![
                LineKind::CodeFenceBacktickOpen,
                LineKind::FencedCodeBacktick,
                LineKind::FencedCodeBacktick,
                LineKind::CodeFenceBacktickClose,
                LineKind::Para
            ]
        );
    }

    #[test]
    fn fence_closer_must_match_char_and_length() {
        assert_eq!(
            kinds(&["````", "```", "~~~~", "`````", "x"]),
            vec![
                LineKind::CodeFenceBacktickOpen,
                LineKind::FencedCodeBacktick,
                LineKind::FencedCodeBacktick,
                LineKind::CodeFenceBacktickClose,
                LineKind::Para
            ]
        );
    }

    #[test]
    fn closing_fence_takes_no_info_string() {
        assert_eq!(
            kinds(&["~~~", "~~~ text", "~~~"]),
            vec![
                LineKind::CodeFenceTildeOpen,
                LineKind::FencedCodeTilde,
                LineKind::CodeFenceTildeClose
            ]
        );
    }

    #[test]
    fn unclosed_fence_runs_to_end() {
        assert_eq!(
            kinds(&["~~~", "a", "", "b"]),
            vec![
                LineKind::CodeFenceTildeOpen,
                LineKind::FencedCodeTilde,
                LineKind::FencedCodeTilde,
                LineKind::FencedCodeTilde
            ]
        );
    }

    #[test]
    fn paragraph_inside_fence_is_not_setext_content() {
        assert_eq!(
            kinds(&["```", "text", "```", "==="]),
            vec![
                LineKind::CodeFenceBacktickOpen,
                LineKind::FencedCodeBacktick,
                LineKind::CodeFenceBacktickClose,
                LineKind::Para
            ]
        );
    }

    #[test]
    fn records_keep_captures_and_templates() {
        let grammar = Grammar::standard().unwrap();
        let records = LineClassifier::new(&grammar)
            .classify(&["## Sub ##", "text", "```", "<b>"])
            .unwrap();

        assert_eq!(records[0].capture.get(1), "## ");
        assert_eq!(records[0].capture.get(2), "Sub");
        assert_eq!(records[0].capture.get(3), " ##");
        assert_eq!(records[1].replacement, INLINE_LINE);
        assert_eq!(records[1].capture.get(0), "text");
        assert_eq!(records[3].replacement, RAW_LINE);
    }

    #[test]
    fn empty_document() {
        let lines: [&str; 0] = [];
        assert!(kinds(&lines).is_empty());
    }
}
