//! Lexibot configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexibotConfig {
    /// Minimum cosine score (inclusive) to accept a knowledge-base match.
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f32,
    #[serde(default)]
    pub nlp: NlpConfig,
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
    #[serde(default)]
    pub responses: ResponsesConfig,
}

fn default_confidence_threshold() -> f32 { 0.2 }

impl Default for LexibotConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
            nlp: NlpConfig::default(),
            knowledge: KnowledgeConfig::default(),
            responses: ResponsesConfig::default(),
        }
    }
}

impl LexibotConfig {
    /// Load config from the default path (~/.lexibot/config.toml).
    /// A missing file is not an error — defaults apply.
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::LexibotError::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| crate::error::LexibotError::Config(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Save config to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::LexibotError::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".lexibot")
            .join("config.toml")
    }

    /// Get the Lexibot home directory.
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".lexibot")
    }
}

/// Normalizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NlpConfig {
    /// Linguistic analyzer: `"english"` (lemmatize + drop stopwords) or
    /// `"none"` (plain split-and-lowercase). Resolved once at startup.
    #[serde(default = "default_analyzer")]
    pub analyzer: String,
}

fn default_analyzer() -> String { "english".into() }

impl Default for NlpConfig {
    fn default() -> Self {
        Self { analyzer: default_analyzer() }
    }
}

/// Knowledge-base source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KnowledgeConfig {
    /// Path to a TOML knowledge-base file. Empty means the built-in entries.
    #[serde(default)]
    pub path: String,
}

/// Fixed response templates for intents and the unmatched fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponsesConfig {
    #[serde(default = "default_greeting")]
    pub greeting: String,
    #[serde(default = "default_farewell")]
    pub farewell: String,
    #[serde(default = "default_thanks")]
    pub thanks: String,
    #[serde(default = "default_unmatched")]
    pub unmatched: String,
}

fn default_greeting() -> String { "Hello! How can I help you today?".into() }
fn default_farewell() -> String { "Goodbye!".into() }
fn default_thanks() -> String { "You're welcome!".into() }
fn default_unmatched() -> String {
    "I'm not sure about that. Try rephrasing, or extend my knowledge base.".into()
}

impl Default for ResponsesConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            farewell: default_farewell(),
            thanks: default_thanks(),
            unmatched: default_unmatched(),
        }
    }
}
