//! Quiz configuration.
//!
//! Values are layered: built-in defaults, then a TOML file, then
//! `TIMEQUIZ_*` environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use timequiz_core::TimeLimit;

/// Top-level timequiz configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// CSV file with a header row and `question,answer` rows.
    #[serde(default = "default_source")]
    pub source: PathBuf,
    /// Time limit for the whole quiz, in seconds.
    #[serde(default = "default_time_limit")]
    pub time_limit_secs: i64,
    /// Randomize question order.
    #[serde(default)]
    pub shuffle: bool,
    /// Fixed shuffle seed; a clock-derived seed is used when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_source() -> PathBuf {
    PathBuf::from("problems.csv")
}

fn default_time_limit() -> i64 {
    TimeLimit::DEFAULT_SECS
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            time_limit_secs: default_time_limit(),
            shuffle: false,
            seed: None,
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub source: Option<PathBuf>,
    pub time_limit_secs: Option<i64>,
    pub shuffle: bool,
    pub seed: Option<u64>,
}

impl QuizConfig {
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(source) = overrides.source {
            self.source = source;
        }
        if let Some(secs) = overrides.time_limit_secs {
            self.time_limit_secs = secs;
        }
        if overrides.shuffle {
            self.shuffle = true;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
    }

    /// Apply `TIMEQUIZ_TIME_LIMIT`, `TIMEQUIZ_CSV` and `TIMEQUIZ_SHUFFLE`.
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(limit) = lookup("TIMEQUIZ_TIME_LIMIT") {
            self.time_limit_secs = limit
                .trim()
                .parse()
                .with_context(|| format!("invalid TIMEQUIZ_TIME_LIMIT: '{limit}'"))?;
        }
        if let Some(csv) = lookup("TIMEQUIZ_CSV") {
            self.source = PathBuf::from(csv);
        }
        if let Some(shuffle) = lookup("TIMEQUIZ_SHUFFLE") {
            self.shuffle = matches!(shuffle.trim(), "1" | "true" | "yes");
        }
        Ok(())
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `timequiz.toml` in the current directory
/// 2. `~/.config/timequiz/config.toml`
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("timequiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config file");
            toml::from_str::<QuizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizConfig::default(),
    };

    config.apply_env(|key| std::env::var(key).ok())?;
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("timequiz"))
}
