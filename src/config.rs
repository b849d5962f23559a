use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_verb")]
    pub default_verb: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub verbs_file: Option<String>,
    #[serde(default = "default_show_pronoun_hint")]
    pub show_pronoun_hint: bool,
    #[serde(default = "default_show_stem")]
    pub show_stem: bool,
}

fn default_verb() -> String {
    "amar".to_string()
}
fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_show_pronoun_hint() -> bool {
    true
}
fn default_show_stem() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_verb: default_verb(),
            theme: default_theme(),
            verbs_file: None,
            show_pronoun_hint: default_show_pronoun_hint(),
            show_stem: default_show_stem(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("conjugar")
            .join("config.toml")
    }

    /// Make `default_verb` name a verb that exists in the loaded dataset:
    /// fall back to "amar", then to the first available key.
    pub fn normalize_default_verb(&mut self, valid_keys: &[&str]) {
        if valid_keys.contains(&self.default_verb.as_str()) {
            return;
        }
        let fallback = default_verb();
        self.default_verb = if valid_keys.contains(&fallback.as_str()) {
            fallback
        } else {
            valid_keys.first().map(|k| k.to_string()).unwrap_or(fallback)
        };
    }
}
