use crate::parsing::ParsedDoc;

/// One `TYPE | markup` row per line. Rows for empty markup are just `TYPE |`.
pub fn normalize(doc: &ParsedDoc<'_>) -> String {
    doc.lines
        .iter()
        .map(|line| {
            format!("{} | {}", line.line_type(), line.markup)
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
