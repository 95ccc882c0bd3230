use linemark_engine::parsing::{parse_document, parse_text, snapshot};
use linemark_engine::{Grammar, InlineParser, LineKind};
use pretty_assertions::assert_eq;

const EM_OPEN: &str = r#"<span class="TMMark">*</span><em>"#;
const EM_CLOSE: &str = r#"</em><span class="TMMark">*</span>"#;

fn grammar() -> Grammar {
    Grammar::standard().unwrap()
}

fn render_inline(text: &str) -> String {
    let grammar = grammar();
    InlineParser::new(grammar.inline()).render(text).unwrap()
}

fn assert_document(text: &str) -> String {
    let grammar = grammar();
    let doc = parse_text(&grammar, text).unwrap();
    snapshot::invariants(&doc, text.lines().count().max(1));
    snapshot::normalize(&doc)
}

#[test]
fn document_snapshot() {
    let out = assert_document("Title\n=====\n- item *one*\n```js\na < b\n```");
    insta::assert_snapshot!(out, @r##"
TMSetextH1 | Title
TMSetextH1Marker | <span class="TMMark TMMark_TMSetextH1Marker">=====</span>
TMUL | <span class="TMMark TMMark_TMUL">- </span>item <span class="TMMark">*</span><em>one</em><span class="TMMark">*</span>
TMCodeFenceBacktickOpen | <span class="TMMark TMMark_TMCodeFenceBacktick">```</span><span class="TMInfoString">js</span>
TMFencedCodeBacktick | a &lt; b
TMCodeFenceBacktickClose | <span class="TMMark TMMark_TMCodeFenceBacktick">```</span>
"##);
}

#[test]
fn reference_snapshot() {
    let out = assert_document("See [docs][d] and ![logo].\n\n[d]: /docs\n[logo]: /logo.png");
    insta::assert_snapshot!(out, @r##"
TMPara | See <span class="TMMark TMMark_TMLink">[</span><span class="TMLink">docs</span><span class="TMMark TMMark_TMLink">]</span><span class="TMMark TMMark_TMLink">[</span><span class="TMLinkLabel">d</span><span class="TMMark TMMark_TMLink">]</span> and <span class="TMMark TMMark_TMImage">![</span><span class="TMImage">logo</span><span class="TMMark TMMark_TMImage">]</span>.
TMBlankLine |
TMLinkReferenceDefinition | <span class="TMMark TMMark_TMLinkReferenceDefinition">[</span><span class="TMLinkLabel TMLinkLabel_Definition">d</span><span class="TMMark TMMark_TMLinkReferenceDefinition">]: </span><span class="TMLinkDestination">/docs</span><span class="TMLinkTitle"></span>
TMLinkReferenceDefinition | <span class="TMMark TMMark_TMLinkReferenceDefinition">[</span><span class="TMLinkLabel TMLinkLabel_Definition">logo</span><span class="TMMark TMMark_TMLinkReferenceDefinition">]: </span><span class="TMLinkDestination">/logo.png</span><span class="TMLinkTitle"></span>
"##);
}

#[test]
fn classification_is_deterministic() {
    let grammar = grammar();
    let lines = ["Title", "---", "", "```", "*x*", "```", "[a]: /b", "> *q*"];
    let first = parse_document(&grammar, &lines).unwrap();
    let second = parse_document(&grammar, &lines).unwrap();
    assert_eq!(first.records, second.records);
    assert_eq!(first.lines, second.lines);
}

#[test]
fn rerendering_is_byte_identical() {
    let text = "***a** b* _c_ [d] `e` ![f][g]";
    assert_eq!(render_inline(text), render_inline(text));
}

#[test]
fn nested_links_never_nest() {
    let out = render_inline("[a [b](c)](d)");
    assert_eq!(out.matches(r#"<span class="TMLink">"#).count(), 1);
    assert!(out.starts_with("[a "));
    assert!(out.ends_with("(c)](d)"));
}

#[test]
fn unmatched_emphasis_is_literal() {
    assert_eq!(render_inline("*hello"), "*hello");
}

#[test]
fn underscore_mid_word() {
    assert!(!render_inline("snake_case_word").contains("<em>"));
    assert_eq!(
        render_inline("_word_"),
        r#"<span class="TMMark">_</span><em>word</em><span class="TMMark">_</span>"#
    );
}

#[test]
fn strong_over_double_em() {
    let out = render_inline("**bold**");
    assert_eq!(out.matches("<strong>").count(), 1);
    assert!(!out.contains("<em>"));
    assert!(out.contains("<strong>bold</strong>"));
}

#[test]
fn setext_heading_reclassifies_previous_line() {
    let grammar = grammar();
    let doc = parse_document(&grammar, &["Title", "====="]).unwrap();
    assert_eq!(doc.records[0].kind, LineKind::SetextH1);
    assert_eq!(doc.records[1].kind, LineKind::SetextH1Marker);
}

#[test]
fn fenced_code_passes_through() {
    let grammar = grammar();
    let doc = parse_document(&grammar, &["```", "*not emphasis*", "```", "*emphasis*"]).unwrap();

    assert_eq!(doc.lines[1].kind, LineKind::FencedCodeBacktick);
    assert_eq!(doc.lines[1].markup, "*not emphasis*");
    assert_eq!(doc.lines[3].markup, format!("{EM_OPEN}emphasis{EM_CLOSE}"));
}

#[test]
fn literal_text_is_always_escaped() {
    let grammar = grammar();
    let doc = parse_document(&grammar, &["<script>", "    <b>", "```", "<i>"]).unwrap();
    for line in &doc.lines {
        assert!(!line.markup.contains("<script>"));
        assert!(!line.markup.contains("<b>"));
        assert!(!line.markup.contains("<i>"));
    }
}

#[test]
fn undefined_reference_is_literal_in_documents() {
    let grammar = grammar();
    let doc = parse_document(&grammar, &["[missing] and [here]", "[here]: /x"]).unwrap();
    let markup = &doc.lines[0].markup;
    assert!(markup.starts_with("[missing] and "));
    assert!(markup.contains(r#"<span class="TMLink">here</span>"#));
}

#[test]
fn undefined_image_and_full_reference_are_literal_in_documents() {
    let grammar = grammar();
    let doc = parse_document(
        &grammar,
        &["![missing] and [text][undefined]", "![logo] [text][d]", "[d]: /x", "[logo]: /l"],
    )
    .unwrap();

    assert_eq!(doc.lines[0].kind, LineKind::Para);
    assert_eq!(doc.lines[0].markup, "![missing] and [text][undefined]");

    let resolved = &doc.lines[1].markup;
    assert!(resolved.contains(r#"<span class="TMImage">logo</span>"#));
    assert!(resolved.contains(r#"<span class="TMLink">text</span>"#));
    assert!(resolved.contains(r#"<span class="TMLinkLabel">d</span>"#));
}

#[test]
fn empty_document_has_one_blank_line() {
    let grammar = grammar();
    let doc = parse_text(&grammar, "").unwrap();
    assert_eq!(doc.lines.len(), 1);
    assert_eq!(doc.lines[0].kind, LineKind::BlankLine);
    assert_eq!(doc.lines[0].markup, "");
}
