pub mod blocks;
pub mod grammar;
pub mod inline;
pub mod labels;
pub mod snapshot;
pub mod template;
pub mod text;

use xi_rope::Rope;

use crate::ParseError;
use blocks::{LineClassifier, LineRecord};
use grammar::{Grammar, LineKind};
use inline::InlineParser;
use labels::LinkLabels;

/// Output for one line: its type and rendered markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub kind: LineKind,
    pub markup: String,
}

impl RenderedLine {
    /// Styling key, e.g. `TMH1`.
    pub fn line_type(&self) -> &'static str {
        self.kind.tag()
    }
}

#[derive(Debug)]
pub struct ParsedDoc<'g> {
    pub records: Vec<LineRecord<'g>>,
    pub link_labels: LinkLabels,
    pub lines: Vec<RenderedLine>,
}

/// Classifies and renders a whole document.
///
/// Runs the classifier, collects link labels from the result, then renders
/// every line with reference links resolved against those labels.
pub fn parse_document<'g, S: AsRef<str>>(grammar: &'g Grammar, lines: &[S]) -> Result<ParsedDoc<'g>, ParseError> {
    let records = LineClassifier::new(grammar).classify(lines)?;
    let link_labels = LinkLabels::collect(grammar, &records);
    log::debug!(
        "classified {} lines, {} link labels",
        records.len(),
        link_labels.len()
    );

    let parser = InlineParser::with_labels(grammar.inline(), &link_labels);
    let lines = records
        .iter()
        .map(|record| {
            Ok(RenderedLine {
                kind: record.kind,
                markup: render_line(record, &parser)?,
            })
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    Ok(ParsedDoc {
        records,
        link_labels,
        lines,
    })
}

/// Expands a record's template, sending `$$N` groups through `parser`.
pub fn render_line(record: &LineRecord<'_>, parser: &InlineParser<'_>) -> Result<String, ParseError> {
    template::expand(record.replacement, &record.capture, |text| parser.render(text))
}

/// Splits `text` into lines and parses them.
pub fn parse_text<'g>(grammar: &'g Grammar, text: &str) -> Result<ParsedDoc<'g>, ParseError> {
    parse_document(grammar, &text::split_lines(text))
}

pub fn parse_rope<'g>(grammar: &'g Grammar, rope: &Rope) -> Result<ParsedDoc<'g>, ParseError> {
    parse_document(grammar, &text::rope_lines(rope))
}
