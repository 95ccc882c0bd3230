use super::pattern::{Capture, Pattern};
use crate::ParseError;

/// Uncompiled inline rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineRuleSpec<'a> {
    pub name: &'a str,
    pub pattern: &'a str,
    pub replacement: &'a str,
}

/// A compiled inline rule.
#[derive(Debug, Clone)]
pub struct InlineRule {
    pub name: String,
    pub pattern: Pattern,
    pub replacement: String,
}

impl InlineRule {
    /// Matches at the start of `text`. Empty matches count as no match,
    /// since they would not move the parser forward.
    pub fn captures(&self, text: &str) -> Result<Option<Capture>, ParseError> {
        Ok(self
            .pattern
            .captures(&self.name, text)?
            .filter(|cap| cap.matched_len() > 0))
    }

    /// Length of the match at the start of `text`, if any.
    pub fn match_len(&self, text: &str) -> Result<Option<usize>, ParseError> {
        Ok(self.captures(text)?.map(|cap| cap.matched_len()))
    }
}

/// The fixed set of inline rules the inline parser drives.
///
/// Delimiter runs have no rule here: they are resolved on the delimiter
/// stack, not by pattern replacement.
#[derive(Debug, Clone)]
pub struct InlineGrammar {
    pub escape: InlineRule,
    pub code: InlineRule,
    /// Its replacement wraps a link: `$0` is the opener, `$$1` the link text.
    pub link_open: InlineRule,
    /// Same template shape as `link_open`, for images.
    pub image_open: InlineRule,
    pub default: InlineRule,
}

impl InlineGrammar {
    pub const ESCAPE: &'static str = "escape";
    pub const CODE: &'static str = "code";
    pub const LINK_OPEN: &'static str = "linkOpen";
    pub const IMAGE_OPEN: &'static str = "imageOpen";
    pub const DEFAULT: &'static str = "default";

    pub const NAMES: [&'static str; 5] = [
        Self::ESCAPE,
        Self::CODE,
        Self::LINK_OPEN,
        Self::IMAGE_OPEN,
        Self::DEFAULT,
    ];

    /// Groups available to link and image templates.
    pub const OPENER_TEMPLATE_GROUPS: usize = 1;

    /// Rules whose matches are skipped over atomically by the bracket matcher.
    pub fn atomic_rules(&self) -> [&InlineRule; 2] {
        [&self.escape, &self.code]
    }
}
