use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for censor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lexicon: LexiconConfig,

    #[serde(default)]
    pub entities: EntitiesConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// JSON lexicon file; the bundled lexicon is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Minimum similarity for hyponyms joining a concept vocabulary
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitiesConfig {
    #[serde(default)]
    pub persons: Vec<String>,

    #[serde(default)]
    pub places: Vec<String>,

    #[serde(default)]
    pub facilities: Vec<String>,

    /// Recognize US state names and postal codes as places
    #[serde(default = "default_true")]
    pub us_states: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Extension given to redacted files
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            path: None,
            similarity_threshold: default_similarity_threshold(),
        }
    }
}

impl Default for EntitiesConfig {
    fn default() -> Self {
        Self {
            persons: Vec::new(),
            places: Vec::new(),
            facilities: Vec::new(),
            us_states: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
        }
    }
}

fn default_similarity_threshold() -> f64 {
    0.4
}

fn default_true() -> bool {
    true
}

fn default_extension() -> String {
    "censored".to_string()
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(&path, content)?;
            Ok(config)
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let threshold = self.lexicon.similarity_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            anyhow::bail!(
                "lexicon.similarity_threshold must be within [0, 1], got {}",
                threshold
            );
        }
        if self.output.extension.trim().is_empty() || self.output.extension.contains('/') {
            anyhow::bail!("output.extension must be a plain file extension");
        }
        Ok(())
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "censor", "censor") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.censor/config.toml")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.lexicon.similarity_threshold, 0.4);
        assert!(config.lexicon.path.is_none());
        assert!(config.entities.us_states);
        assert_eq!(config.output.extension, "censored");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.output.extension, config.output.extension);
        assert_eq!(
            parsed.lexicon.similarity_threshold,
            config.lexicon.similarity_threshold
        );
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[lexicon]
path = "/opt/wordnet.json"

[entities]
persons = ["Ann Lee", "Bob"]
us_states = false
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.lexicon.path, Some(PathBuf::from("/opt/wordnet.json")));
        assert_eq!(config.lexicon.similarity_threshold, 0.4);
        assert_eq!(config.entities.persons, vec!["Ann Lee", "Bob"]);
        assert!(!config.entities.us_states);
        assert_eq!(config.output.extension, "censored");
    }

    #[test]
    fn test_load_from_rejects_bad_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[lexicon]\nsimilarity_threshold = 1.5\n").unwrap();

        assert!(Config::load_from(&path).is_err());

        std::fs::write(&path, "[output]\nextension = \"redacted\"\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output.extension, "redacted");
    }
}
