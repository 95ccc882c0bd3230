//! # Grammar Tables
//!
//! Immutable, ordered rule sets driving both parser stages: one table of
//! line rules for the classifier and a fixed set of inline rules for the
//! inline parser. A [`Grammar`] is compiled once and then shared by
//! reference; nothing in it changes during parsing.
//!
//! All validation happens in [`Grammar::from_specs`], so a malformed rule
//! fails at load time and never halfway through a document.

pub mod builtin;
pub mod inline;
pub mod line;
pub mod pattern;

pub use inline::{InlineGrammar, InlineRule, InlineRuleSpec};
pub use line::{LineKind, LineRule, LineRuleSpec};
pub use pattern::{Capture, Pattern};

use super::template;
use crate::GrammarError;

/// Name of the capture group holding a fence run.
pub const FENCE_GROUP: &str = "seq";

#[derive(Debug, Clone)]
pub struct Grammar {
    lines: Vec<LineRule>,
    inline: InlineGrammar,
}

impl Grammar {
    /// Compiles the built-in tables.
    pub fn standard() -> Result<Self, GrammarError> {
        Self::from_specs(builtin::LINE_RULES, builtin::INLINE_RULES)
    }

    pub fn from_specs(
        line_specs: &[LineRuleSpec<'_>],
        inline_specs: &[InlineRuleSpec<'_>],
    ) -> Result<Self, GrammarError> {
        let lines = line_specs
            .iter()
            .map(compile_line_rule)
            .collect::<Result<Vec<_>, _>>()?;
        let inline = compile_inline_grammar(inline_specs)?;
        let grammar = Self { lines, inline };
        grammar.check_required_rules()?;
        Ok(grammar)
    }

    pub fn line_rules(&self) -> &[LineRule] {
        &self.lines
    }

    pub fn inline(&self) -> &InlineGrammar {
        &self.inline
    }

    /// First rule of the given kind.
    pub fn rule(&self, kind: LineKind) -> Option<&LineRule> {
        self.lines.iter().find(|r| r.kind == kind)
    }

    /// The closing rule for a fence opener.
    pub fn closing_rule(&self, opener: LineKind) -> Option<&LineRule> {
        self.lines.iter().find(|r| r.opener == Some(opener))
    }

    /// Label group of the link reference definition rule.
    pub fn label_group(&self) -> Option<usize> {
        self.rule(LineKind::LinkReferenceDefinition)
            .and_then(|r| r.label_group)
    }

    /// Checks the rules the classifier relies on by contract.
    fn check_required_rules(&self) -> Result<(), GrammarError> {
        let require = |kind: LineKind, required_by: LineKind| {
            if self.rule(kind).is_some() {
                Ok(())
            } else {
                Err(GrammarError::MissingRule { kind, required_by })
            }
        };

        if self.rule(LineKind::SetextH2Marker).is_some() {
            require(LineKind::Ul, LineKind::SetextH2Marker)?;
            require(LineKind::Hr, LineKind::SetextH2Marker)?;
        }
        if self.rule(LineKind::SetextH1Marker).is_some() {
            require(LineKind::Hr, LineKind::SetextH1Marker)?;
        }
        for (opener, closer) in [
            (
                LineKind::CodeFenceBacktickOpen,
                LineKind::CodeFenceBacktickClose,
            ),
            (LineKind::CodeFenceTildeOpen, LineKind::CodeFenceTildeClose),
        ] {
            if self.rule(opener).is_some() && self.closing_rule(opener).is_none() {
                return Err(GrammarError::MissingRule {
                    kind: closer,
                    required_by: opener,
                });
            }
        }
        Ok(())
    }
}

fn compile_line_rule(spec: &LineRuleSpec<'_>) -> Result<LineRule, GrammarError> {
    let name = spec.kind.tag();
    let pattern = Pattern::new(name, spec.pattern)?;
    check_placeholders(name, spec.replacement, pattern.group_count())?;

    let expected_opener = match spec.kind {
        LineKind::CodeFenceBacktickClose => Some(LineKind::CodeFenceBacktickOpen),
        LineKind::CodeFenceTildeClose => Some(LineKind::CodeFenceTildeOpen),
        _ => None,
    };
    if spec.opener != expected_opener {
        return Err(GrammarError::Opener {
            rule: name.to_string(),
        });
    }

    let is_fence = spec.kind.is_fence_close()
        || matches!(
            spec.kind,
            LineKind::CodeFenceBacktickOpen | LineKind::CodeFenceTildeOpen
        );
    let fence_group = if is_fence {
        Some(
            pattern
                .group_index(FENCE_GROUP)
                .ok_or_else(|| GrammarError::MissingGroup {
                    rule: name.to_string(),
                    group: FENCE_GROUP.to_string(),
                })?,
        )
    } else {
        None
    };

    let label_group = match (spec.kind, spec.label_group) {
        (LineKind::LinkReferenceDefinition, Some(g)) if (1..=pattern.group_count()).contains(&g) => {
            Some(g)
        }
        (LineKind::LinkReferenceDefinition, g) => {
            return Err(GrammarError::MissingGroup {
                rule: name.to_string(),
                group: g.map_or_else(|| "label".to_string(), |g| g.to_string()),
            });
        }
        (_, _) => None,
    };

    Ok(LineRule {
        kind: spec.kind,
        pattern,
        replacement: spec.replacement.to_string(),
        opener: spec.opener,
        label_group,
        fence_group,
    })
}

fn compile_inline_grammar(specs: &[InlineRuleSpec<'_>]) -> Result<InlineGrammar, GrammarError> {
    if let Some(unknown) = specs
        .iter()
        .find(|s| !InlineGrammar::NAMES.contains(&s.name))
    {
        return Err(GrammarError::UnknownInlineRule(unknown.name.to_string()));
    }

    let compile = |name: &str| -> Result<InlineRule, GrammarError> {
        let spec = specs
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| GrammarError::MissingInlineRule(name.to_string()))?;
        let pattern = Pattern::new(name, spec.pattern)?;
        let groups = if name == InlineGrammar::LINK_OPEN || name == InlineGrammar::IMAGE_OPEN {
            InlineGrammar::OPENER_TEMPLATE_GROUPS
        } else {
            pattern.group_count()
        };
        check_placeholders(name, spec.replacement, groups)?;
        if name == InlineGrammar::DEFAULT {
            check_not_inline(name, spec.replacement)?;
        }
        Ok(InlineRule {
            name: name.to_string(),
            pattern,
            replacement: spec.replacement.to_string(),
        })
    };

    Ok(InlineGrammar {
        escape: compile(InlineGrammar::ESCAPE)?,
        code: compile(InlineGrammar::CODE)?,
        link_open: compile(InlineGrammar::LINK_OPEN)?,
        image_open: compile(InlineGrammar::IMAGE_OPEN)?,
        default: compile(InlineGrammar::DEFAULT)?,
    })
}

fn check_placeholders(rule: &str, replacement: &str, groups: usize) -> Result<(), GrammarError> {
    match template::placeholders(replacement).find(|p| p.group > groups) {
        Some(p) => Err(GrammarError::Placeholder {
            rule: rule.to_string(),
            group: p.group,
            groups,
        }),
        None => Ok(()),
    }
}

/// The default rule matches every character, so a `$$N` in its template
/// would feed its own match back into the inline parser forever.
fn check_not_inline(rule: &str, replacement: &str) -> Result<(), GrammarError> {
    match template::placeholders(replacement).find(|p| p.inline) {
        Some(p) => Err(GrammarError::InlineSelfReference {
            rule: rule.to_string(),
            group: p.group,
        }),
        None => Ok(()),
    }
}
