//! Setext heading patch pass.
//!
//! A valid `===`/`---` marker turns the paragraph lines above it into
//! heading content. The forward scan only records where the markers are;
//! this pass rewrites the earlier records afterwards. Doing it later is
//! equivalent to doing it in place: the forward scan only ever looks at
//! record `i - 1`, and a marker record is never rewritten.

use crate::parsing::grammar::LineKind;

use super::classify::LineRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetextMarker {
    /// Index of the marker line.
    pub line: usize,
    /// `TMSetextH1` or `TMSetextH2`.
    pub heading: LineKind,
}

/// Rewrites the paragraph run directly above each marker, stopping at the
/// first non-paragraph line or after line 0.
pub fn apply<S: AsRef<str>>(records: &mut [LineRecord<'_>], lines: &[S], markers: &[SetextMarker]) {
    for marker in markers {
        for index in (0..marker.line).rev() {
            if records[index].kind != LineKind::Para {
                break;
            }
            records[index] = LineRecord::inline(marker.heading, lines[index].as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_up_to_first_non_paragraph() {
        let lines = ["intro", "", "a", "b", "==="];
        let mut records = vec![
            LineRecord::paragraph("intro"),
            LineRecord::inline(LineKind::BlankLine, ""),
            LineRecord::paragraph("a"),
            LineRecord::paragraph("b"),
            LineRecord::inline(LineKind::SetextH1Marker, "==="),
        ];
        apply(
            &mut records,
            &lines,
            &[SetextMarker {
                line: 4,
                heading: LineKind::SetextH1,
            }],
        );

        let kinds: Vec<_> = records.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::Para,
                LineKind::BlankLine,
                LineKind::SetextH1,
                LineKind::SetextH1,
                LineKind::SetextH1Marker
            ]
        );
        assert_eq!(records[2].capture.get(0), "a");
    }

    #[test]
    fn includes_line_zero() {
        let lines = ["a", "b", "---"];
        let mut records = vec![
            LineRecord::paragraph("a"),
            LineRecord::paragraph("b"),
            LineRecord::inline(LineKind::SetextH2Marker, "---"),
        ];
        apply(
            &mut records,
            &lines,
            &[SetextMarker {
                line: 2,
                heading: LineKind::SetextH2,
            }],
        );
        assert_eq!(records[0].kind, LineKind::SetextH2);
        assert_eq!(records[1].kind, LineKind::SetextH2);
    }
}
