//! Driver configuration.
//!
//! Reads `falltris.toml` from the working directory, or the file named by the
//! `FALLTRIS_CONFIG` environment variable. Every key is optional:
//!
//! ```toml
//! [game]
//! tick_ms = 400       # gravity cadence
//! seed = 12345        # piece sequence seed (default: from the clock)
//! scoring = "lines"   # "lines" or "classic"
//! ```

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::core::ScoringRule;
use crate::types::DEFAULT_TICK_MS;

/// Default config file name
pub const CONFIG_FILE: &str = "falltris.toml";

/// Environment variable overriding the config path
pub const CONFIG_ENV: &str = "FALLTRIS_CONFIG";

// ── Public Config Struct ──

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub tick: Duration,
    pub seed: u32,
    pub scoring: ScoringRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(DEFAULT_TICK_MS as u64),
            seed: clock_seed(),
            scoring: ScoringRule::default(),
        }
    }
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    #[serde(default)]
    game: TomlGame,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct TomlGame {
    #[serde(default = "default_tick_ms")]
    tick_ms: u64,
    #[serde(default)]
    seed: Option<u32>,
    #[serde(default = "default_scoring")]
    scoring: String,
}

impl Default for TomlGame {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            seed: None,
            scoring: default_scoring(),
        }
    }
}

fn default_tick_ms() -> u64 {
    DEFAULT_TICK_MS as u64
}

fn default_scoring() -> String {
    ScoringRule::default().as_str().to_string()
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

// ── Loading ──

impl GameConfig {
    /// Parse a TOML document; missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let raw: TomlConfig = toml::from_str(text).context("parsing config")?;
        let game = raw.game;

        if game.tick_ms == 0 {
            bail!("game.tick_ms must be positive");
        }
        let Some(scoring) = ScoringRule::from_str(&game.scoring) else {
            bail!(
                "unknown game.scoring {:?} (expected \"lines\" or \"classic\")",
                game.scoring
            );
        };

        Ok(Self {
            tick: Duration::from_millis(game.tick_ms),
            seed: game.seed.unwrap_or_else(clock_seed),
            scoring,
        })
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Load from `$FALLTRIS_CONFIG` or `./falltris.toml`.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }
}

pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = GameConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.tick, Duration::from_millis(400));
        assert_eq!(cfg.scoring, ScoringRule::Lines);
    }

    #[test]
    fn explicit_values_are_read() {
        let cfg = GameConfig::from_toml_str(
            "[game]\ntick_ms = 250\nseed = 9\nscoring = \"classic\"\n",
        )
        .unwrap();
        assert_eq!(cfg.tick, Duration::from_millis(250));
        assert_eq!(cfg.seed, 9);
        assert_eq!(cfg.scoring, ScoringRule::Classic);
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(GameConfig::from_toml_str("[game]\nscoring = \"nes\"\n").is_err());
        assert!(GameConfig::from_toml_str("[game]\ntick_ms = 0\n").is_err());
        assert!(GameConfig::from_toml_str("[game]\nspeed = 3\n").is_err());
        assert!(GameConfig::from_toml_str("not toml").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = GameConfig::load_from(Path::new("/nonexistent/falltris.toml")).unwrap();
        assert_eq!(cfg.tick, Duration::from_millis(400));
    }
}
