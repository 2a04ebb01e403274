use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parse::Splitter;

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

// ── Final (merged) config types ──

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub split: SplitConfig,
    #[serde(default)]
    pub fuzzy: FuzzyConfig,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SplitConfig {
    #[serde(default)]
    pub separator: String,
    /// Regex separator; takes precedence over `separator` when non-empty.
    #[serde(default)]
    pub pattern: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct FuzzyConfig {
    #[serde(default)]
    pub prefixes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LoggingSettings {
    #[serde(default)]
    pub level: String,
    /// Log file path. Empty disables file logging.
    #[serde(default)]
    pub file: String,
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    split: SplitOverlay,
    #[serde(default)]
    fuzzy: FuzzyOverlay,
    #[serde(default)]
    logging: LoggingOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct SplitOverlay {
    separator: Option<String>,
    pattern: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct FuzzyOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    prefixes: Vec<String>,
    #[serde(default)]
    remove_prefixes: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
struct LoggingOverlay {
    level: Option<String>,
    file: Option<String>,
}

// ── Merge logic ──

/// Merge a user list into a default list.
/// In replace mode: user list replaces default entirely.
/// In merge mode: remove items first, then extend with additions (deduped).
fn merge_list(base: &mut Vec<String>, add: Vec<String>, remove: &[String], replace: bool) {
    if replace {
        *base = add;
    } else {
        base.retain(|item| !remove.contains(item));
        for item in add {
            if !base.contains(&item) {
                base.push(item);
            }
        }
    }
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/argline/config.toml (if exists)
    pub fn load() -> Self {
        let mut config = Self::default_config();
        let Some(path) = Self::overlay_path() else {
            return config;
        };
        let Ok(content) = std::fs::read_to_string(&path) else {
            return config;
        };
        match Self::parse_overlay(&content) {
            Ok(overlay) => config.apply_overlay(overlay),
            Err(e) => log::warn!("ignoring {}: {e}", path.display()),
        }
        config
    }

    /// Load defaults merged with an explicit overlay file. Unlike [`Config::load`],
    /// a missing or malformed file is an error.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        let mut config = Self::default_config();
        config.apply_overlay(Self::parse_overlay(&content)?);
        Ok(config)
    }

    fn overlay_path() -> Option<std::path::PathBuf> {
        let home = std::env::var_os("HOME")?;
        Some(std::path::Path::new(&home).join(".config/argline/config.toml"))
    }

    fn parse_overlay(content: &str) -> Result<ConfigOverlay> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Apply an overlay on top of this config (merge semantics).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        // Split: scalar overrides
        if let Some(v) = overlay.split.separator {
            self.split.separator = v;
        }
        if let Some(v) = overlay.split.pattern {
            self.split.pattern = v;
        }

        let f = overlay.fuzzy;
        merge_list(
            &mut self.fuzzy.prefixes,
            f.prefixes,
            &f.remove_prefixes,
            f.replace,
        );

        if let Some(v) = overlay.logging.level {
            self.logging.level = v;
        }
        if let Some(v) = overlay.logging.file {
            self.logging.file = v;
        }
    }

    /// Build the split criterion. A non-empty pattern wins over the literal separator.
    pub fn splitter(&self) -> Result<Splitter> {
        if self.split.pattern.is_empty() {
            Ok(Splitter::Literal(self.split.separator.clone()))
        } else {
            Ok(Splitter::Pattern(regex::Regex::new(&self.split.pattern)?))
        }
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Apply an overlay from a TOML string. Used for testing.
    #[cfg(test)]
    fn apply_overlay_str(&mut self, toml_str: &str) {
        let overlay: ConfigOverlay = toml::from_str(toml_str).unwrap();
        self.apply_overlay(overlay);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
