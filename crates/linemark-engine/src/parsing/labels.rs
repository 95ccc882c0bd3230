use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::blocks::LineRecord;
use super::grammar::{Grammar, LineKind};

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// A link reference definition found in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDefinition {
    /// Label as written.
    pub label: String,
    /// Index of the defining line; its record holds the full capture.
    pub line: usize,
}

/// Normalized label -> definition, rebuilt on every classification pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkLabels {
    definitions: BTreeMap<String, LinkDefinition>,
}

impl LinkLabels {
    /// Scans classified lines for link reference definitions.
    ///
    /// The first definition of a label wins.
    pub fn collect(grammar: &Grammar, records: &[LineRecord<'_>]) -> Self {
        let mut labels = Self::default();
        let Some(group) = grammar.label_group() else {
            return labels;
        };

        for (line, record) in records.iter().enumerate() {
            if record.kind != LineKind::LinkReferenceDefinition {
                continue;
            }
            labels.insert(LinkDefinition {
                label: record.capture.get(group).to_string(),
                line,
            });
        }
        labels
    }

    /// Case-folds and collapses whitespace, so `[Foo  Bar]` finds `[foo bar]`.
    pub fn normalize(label: &str) -> String {
        WHITESPACE.replace_all(label.trim(), " ").to_lowercase()
    }

    pub fn insert(&mut self, definition: LinkDefinition) {
        self.definitions
            .entry(Self::normalize(&definition.label))
            .or_insert(definition);
    }

    pub fn get(&self, label: &str) -> Option<&LinkDefinition> {
        self.definitions.get(&Self::normalize(label))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
