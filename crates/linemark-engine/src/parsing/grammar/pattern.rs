use fancy_regex::Regex;

use crate::{GrammarError, ParseError};

/// A compiled grammar pattern.
///
/// Backed by `fancy_regex` because the code span rule needs a backreference
/// to find a closing backtick run of the same length.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub fn new(rule: &str, source: &str) -> Result<Self, GrammarError> {
        let regex = Regex::new(source).map_err(|e| GrammarError::Pattern {
            rule: rule.to_string(),
            source: Box::new(e),
        })?;
        Ok(Self { regex })
    }

    /// Number of capture groups, not counting the implicit group 0.
    pub fn group_count(&self) -> usize {
        self.regex.captures_len().saturating_sub(1)
    }

    /// Index of the named group, if the pattern declares it.
    pub fn group_index(&self, name: &str) -> Option<usize> {
        self.regex
            .capture_names()
            .position(|group| group == Some(name))
    }

    pub fn captures(&self, rule: &str, text: &str) -> Result<Option<Capture>, ParseError> {
        let caps = self
            .regex
            .captures(text)
            .map_err(|e| ParseError::Match {
                rule: rule.to_string(),
                source: Box::new(e),
            })?;
        Ok(caps.map(|caps| {
            Capture(
                (0..caps.len())
                    .map(|i| caps.get(i).map_or(String::new(), |m| m.as_str().to_string()))
                    .collect(),
            )
        }))
    }
}

/// Ordered substrings of one match. Group 0 is the whole match; groups that
/// did not participate are empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Capture(Vec<String>);

impl Capture {
    /// A capture holding only the whole line as group 0.
    pub fn whole(line: &str) -> Self {
        Capture(vec![line.to_string()])
    }

    pub fn get(&self, group: usize) -> &str {
        self.0.get(group).map_or("", String::as_str)
    }

    /// Byte length of the overall match.
    pub fn matched_len(&self) -> usize {
        self.get(0).len()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Capture {
    fn from(groups: Vec<String>) -> Self {
        Capture(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_groups_without_group_zero() {
        let p = Pattern::new("t", r"^(a)(b)?$").unwrap();
        assert_eq!(p.group_count(), 2);
    }

    #[test]
    fn finds_named_group() {
        let p = Pattern::new("t", r"^( {0,3}(?P<seq>```+))$").unwrap();
        assert_eq!(p.group_index("seq"), Some(2));
        assert_eq!(p.group_index("nope"), None);
    }

    #[test]
    fn missing_groups_are_empty() {
        let p = Pattern::new("t", r"^(a)(b)?").unwrap();
        let cap = p.captures("t", "ac").unwrap().unwrap();
        assert_eq!(cap.get(0), "a");
        assert_eq!(cap.get(1), "a");
        assert_eq!(cap.get(2), "");
        assert_eq!(cap.get(9), "");
    }

    #[test]
    fn backreferences_are_supported() {
        let p = Pattern::new("code", r"^(`+)([^`]+)(\1)").unwrap();
        let cap = p.captures("code", "``a``b").unwrap().unwrap();
        assert_eq!(cap.matched_len(), 5);
        assert!(p.captures("code", "``a`").unwrap().is_none());
    }

    #[test]
    fn invalid_pattern_is_a_grammar_error() {
        let err = Pattern::new("broken", "(").unwrap_err();
        assert!(matches!(err, GrammarError::Pattern { ref rule, .. } if rule == "broken"));
    }
}
