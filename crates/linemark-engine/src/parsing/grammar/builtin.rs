//! The built-in grammar tables.
//!
//! Line rules are tried in order and the first match wins, so order matters:
//! setext markers must come before `TMHR` (`---` is a marker first), and
//! `TMHR` before `TMUL` (`* * *` is a rule, not a list item).

use super::inline::{InlineGrammar, InlineRuleSpec};
use super::line::{LineKind, LineRuleSpec};

const fn line(kind: LineKind, pattern: &'static str, replacement: &'static str) -> LineRuleSpec<'static> {
    LineRuleSpec {
        kind,
        pattern,
        replacement,
        opener: None,
        label_group: None,
    }
}

pub const LINE_RULES: &[LineRuleSpec<'static>] = &[
    line(
        LineKind::H1,
        r"^( {0,3}#(?:[ \t]+|$))(.*?)((?:[ \t]+#+[ \t]*)?)$",
        r#"<span class="TMMark TMMark_TMH1">$1</span>$$2<span class="TMMark TMMark_TMH1">$3</span>"#,
    ),
    line(
        LineKind::H2,
        r"^( {0,3}##(?:[ \t]+|$))(.*?)((?:[ \t]+#+[ \t]*)?)$",
        r#"<span class="TMMark TMMark_TMH2">$1</span>$$2<span class="TMMark TMMark_TMH2">$3</span>"#,
    ),
    line(
        LineKind::H3,
        r"^( {0,3}###(?:[ \t]+|$))(.*?)((?:[ \t]+#+[ \t]*)?)$",
        r#"<span class="TMMark TMMark_TMH3">$1</span>$$2<span class="TMMark TMMark_TMH3">$3</span>"#,
    ),
    line(
        LineKind::H4,
        r"^( {0,3}####(?:[ \t]+|$))(.*?)((?:[ \t]+#+[ \t]*)?)$",
        r#"<span class="TMMark TMMark_TMH4">$1</span>$$2<span class="TMMark TMMark_TMH4">$3</span>"#,
    ),
    line(
        LineKind::H5,
        r"^( {0,3}#####(?:[ \t]+|$))(.*?)((?:[ \t]+#+[ \t]*)?)$",
        r#"<span class="TMMark TMMark_TMH5">$1</span>$$2<span class="TMMark TMMark_TMH5">$3</span>"#,
    ),
    line(
        LineKind::H6,
        r"^( {0,3}######(?:[ \t]+|$))(.*?)((?:[ \t]+#+[ \t]*)?)$",
        r#"<span class="TMMark TMMark_TMH6">$1</span>$$2<span class="TMMark TMMark_TMH6">$3</span>"#,
    ),
    line(
        LineKind::Blockquote,
        r"^( {0,3}>[ ]?)(.*)$",
        r#"<span class="TMMark TMMark_TMBlockquote">$1</span>$$2"#,
    ),
    line(
        LineKind::CodeFenceBacktickOpen,
        r"^( {0,3}(?P<seq>````*)[ \t]*)([^`]*?)([ \t]*)$",
        r#"<span class="TMMark TMMark_TMCodeFenceBacktick">$1</span><span class="TMInfoString">$3</span>$4"#,
    ),
    line(
        LineKind::CodeFenceTildeOpen,
        r"^( {0,3}(?P<seq>~~~~*)[ \t]*)(.*?)([ \t]*)$",
        r#"<span class="TMMark TMMark_TMCodeFenceTilde">$1</span><span class="TMInfoString">$3</span>$4"#,
    ),
    LineRuleSpec {
        kind: LineKind::CodeFenceBacktickClose,
        pattern: r"^( {0,3}(?P<seq>````*))([ \t]*)$",
        replacement: r#"<span class="TMMark TMMark_TMCodeFenceBacktick">$1</span>$3"#,
        opener: Some(LineKind::CodeFenceBacktickOpen),
        label_group: None,
    },
    LineRuleSpec {
        kind: LineKind::CodeFenceTildeClose,
        pattern: r"^( {0,3}(?P<seq>~~~~*))([ \t]*)$",
        replacement: r#"<span class="TMMark TMMark_TMCodeFenceTilde">$1</span>$3"#,
        opener: Some(LineKind::CodeFenceTildeOpen),
        label_group: None,
    },
    line(LineKind::BlankLine, r"^([ \t]*)$", "$0"),
    line(
        LineKind::SetextH1Marker,
        r"^ {0,3}=+[ \t]*$",
        r#"<span class="TMMark TMMark_TMSetextH1Marker">$0</span>"#,
    ),
    line(
        LineKind::SetextH2Marker,
        r"^ {0,3}-+[ \t]*$",
        r#"<span class="TMMark TMMark_TMSetextH2Marker">$0</span>"#,
    ),
    line(
        LineKind::Hr,
        r"^ {0,3}(?:(?:\*[ \t]*){3,}|(?:-[ \t]*){3,}|(?:_[ \t]*){3,})$",
        r#"<span class="TMMark TMMark_TMHR">$0</span>"#,
    ),
    line(
        LineKind::Ul,
        r"^( {0,3}[+*-] {1,4})(.*)$",
        r#"<span class="TMMark TMMark_TMUL">$1</span>$$2"#,
    ),
    line(
        LineKind::Ol,
        r"^( {0,3}\d{1,9}[.)] {1,4})(.*)$",
        r#"<span class="TMMark TMMark_TMOL">$1</span>$$2"#,
    ),
    line(
        LineKind::IndentedCode,
        r"^( {4}|\t)(.*)$",
        r#"<span class="TMMark TMMark_TMIndentedCode">$1</span>$2"#,
    ),
    LineRuleSpec {
        kind: LineKind::LinkReferenceDefinition,
        pattern: r#"^( {0,3}\[[ \t]*)([^\s\]](?:[^\]\\]|\\.)*?)([ \t]*\]:[ \t]*)((?:[^\s<>]+)|(?:<(?:[^<>\\]|\\.)*>))?([ \t]*)((?:\((?:[^()\\]|\\.)*\))|(?:"(?:[^"\\]|\\.)*")|(?:'(?:[^'\\]|\\.)*'))?([ \t]*)$"#,
        replacement: r#"<span class="TMMark TMMark_TMLinkReferenceDefinition">$1</span><span class="TMLinkLabel TMLinkLabel_Definition">$2</span><span class="TMMark TMMark_TMLinkReferenceDefinition">$3</span><span class="TMLinkDestination">$4</span>$5<span class="TMLinkTitle">$6</span>$7"#,
        opener: None,
        label_group: Some(2),
    },
];

pub const INLINE_RULES: &[InlineRuleSpec<'static>] = &[
    InlineRuleSpec {
        name: InlineGrammar::ESCAPE,
        pattern: r##"^\\([!"#$%&'()*+,\-./:;<=>?@\[\]^_`{|}~\\])"##,
        replacement: r#"<span class="TMMark TMMark_TMEscape">\</span>$1"#,
    },
    InlineRuleSpec {
        name: InlineGrammar::CODE,
        pattern: r"^(`+)((?:[^`])|(?:[^`].*?[^`]))(\1)",
        replacement: r#"<span class="TMMark TMMark_TMCode">$1</span><code class="TMCode">$2</code><span class="TMMark TMMark_TMCode">$3</span>"#,
    },
    InlineRuleSpec {
        name: InlineGrammar::LINK_OPEN,
        pattern: r"^\[",
        replacement: r#"<span class="TMMark TMMark_TMLink">$0</span><span class="TMLink">$$1</span><span class="TMMark TMMark_TMLink">]</span>"#,
    },
    InlineRuleSpec {
        name: InlineGrammar::IMAGE_OPEN,
        pattern: r"^!\[",
        replacement: r#"<span class="TMMark TMMark_TMImage">$0</span><span class="TMImage">$$1</span><span class="TMMark TMMark_TMImage">]</span>"#,
    },
    InlineRuleSpec {
        name: InlineGrammar::DEFAULT,
        pattern: r"(?s)^(.)",
        replacement: "$1",
    },
];
