use linemark_engine::parsing::grammar::builtin;
use linemark_engine::{Grammar, GrammarError, InlineRuleSpec, LineKind, LineRuleSpec};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid grammar: {0}")]
    Grammar(#[from] GrammarError),
}

/// One `[[line]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRuleConfig {
    #[serde(rename = "type")]
    pub line_type: String,
    pub pattern: String,
    pub replacement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_group: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opener: Option<String>,
}

/// One `[[inline]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineRuleConfig {
    pub name: String,
    pub pattern: String,
    pub replacement: String,
}

/// A grammar as written in a TOML file.
///
/// Either table list may be left out, in which case the built-in rules for
/// that level are used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<Vec<LineRuleConfig>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<Vec<InlineRuleConfig>>,
}

impl GrammarConfig {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: GrammarConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, self.to_toml()?)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/linemark");
        PathBuf::from(config_dir.as_ref()).join("grammar.toml")
    }

    /// The built-in grammar, written out in full.
    pub fn builtin() -> Self {
        Self {
            line: Some(builtin::LINE_RULES.iter().map(LineRuleConfig::from).collect()),
            inline: Some(builtin::INLINE_RULES.iter().map(InlineRuleConfig::from).collect()),
        }
    }

    /// Validates the rules and compiles them.
    pub fn compile(&self) -> Result<Grammar, GrammarError> {
        let line_specs = match &self.line {
            Some(rules) => rules
                .iter()
                .map(LineRuleConfig::to_spec)
                .collect::<Result<Vec<_>, _>>()?,
            None => builtin::LINE_RULES.to_vec(),
        };
        let inline_specs = match &self.inline {
            Some(rules) => rules.iter().map(InlineRuleConfig::to_spec).collect(),
            None => builtin::INLINE_RULES.to_vec(),
        };
        Grammar::from_specs(&line_specs, &inline_specs)
    }
}

impl LineRuleConfig {
    fn to_spec(&self) -> Result<LineRuleSpec<'_>, GrammarError> {
        let kind = parse_line_type(&self.line_type)?;
        let opener = self.opener.as_deref().map(parse_line_type).transpose()?;
        Ok(LineRuleSpec {
            kind,
            pattern: &self.pattern,
            replacement: &self.replacement,
            opener,
            label_group: self.label_group,
        })
    }
}

impl From<&LineRuleSpec<'_>> for LineRuleConfig {
    fn from(spec: &LineRuleSpec<'_>) -> Self {
        Self {
            line_type: spec.kind.tag().to_string(),
            pattern: spec.pattern.to_string(),
            replacement: spec.replacement.to_string(),
            label_group: spec.label_group,
            opener: spec.opener.map(|kind| kind.tag().to_string()),
        }
    }
}

impl InlineRuleConfig {
    fn to_spec(&self) -> InlineRuleSpec<'_> {
        InlineRuleSpec {
            name: &self.name,
            pattern: &self.pattern,
            replacement: &self.replacement,
        }
    }
}

impl From<&InlineRuleSpec<'_>> for InlineRuleConfig {
    fn from(spec: &InlineRuleSpec<'_>) -> Self {
        Self {
            name: spec.name.to_string(),
            pattern: spec.pattern.to_string(),
            replacement: spec.replacement.to_string(),
        }
    }
}

fn parse_line_type(tag: &str) -> Result<LineKind, GrammarError> {
    LineKind::from_tag(tag).ok_or_else(|| GrammarError::UnknownLineType(tag.to_string()))
}
