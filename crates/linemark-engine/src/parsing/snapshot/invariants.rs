use crate::parsing::ParsedDoc;
use crate::parsing::blocks::RAW_LINE;

const EMPHASIS_TAGS: [(&str, &str); 2] = [("<em>", "</em>"), ("<strong>", "</strong>")];

pub fn check(doc: &ParsedDoc<'_>, line_count: usize) {
    assert_eq!(
        doc.records.len(),
        line_count,
        "expected one record per line"
    );
    assert_eq!(
        doc.lines.len(),
        line_count,
        "expected one rendered line per line"
    );

    for (index, (record, line)) in doc.records.iter().zip(&doc.lines).enumerate() {
        assert_eq!(record.kind, line.kind, "line {index}: kind changed while rendering");

        for (open, close) in EMPHASIS_TAGS {
            assert_eq!(
                line.markup.matches(open).count(),
                line.markup.matches(close).count(),
                "line {index}: unbalanced {open} in {:?}",
                line.markup
            );
        }

        if record.replacement == RAW_LINE {
            assert!(
                !line.markup.contains('<'),
                "line {index}: raw line produced markup: {:?}",
                line.markup
            );
        }
    }
}
