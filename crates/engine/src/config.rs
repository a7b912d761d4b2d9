//! Runtime configuration.
//!
//! Defaults reproduce the classic timing. Every field can be overridden
//! through an environment variable; the program itself takes no arguments.

use anyhow::{Context, Result};

use crate::core::Gravity;
use crate::types::{GRAVITY_MS, IDLE_SLEEP_MS, SOFT_DROP_GRAVITY_MS};

pub const ENV_GRAVITY_MS: &str = "TETRIS_GRAVITY_MS";
pub const ENV_SOFT_DROP_MS: &str = "TETRIS_SOFT_DROP_MS";
pub const ENV_IDLE_SLEEP_MS: &str = "TETRIS_IDLE_SLEEP_MS";
pub const ENV_SEED: &str = "TETRIS_SEED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub gravity_ms: u32,
    pub soft_drop_ms: u32,
    pub idle_sleep_ms: u32,
    /// Fixed piece seed; `None` seeds from the system clock.
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity_ms: GRAVITY_MS,
            soft_drop_ms: SOFT_DROP_GRAVITY_MS,
            idle_sleep_ms: IDLE_SLEEP_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Defaults overlaid with any `TETRIS_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`GameConfig::from_env`] but reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(v) = parse_var(&lookup, ENV_GRAVITY_MS)? {
            config.gravity_ms = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_SOFT_DROP_MS)? {
            config.soft_drop_ms = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_IDLE_SLEEP_MS)? {
            config.idle_sleep_ms = v;
        }
        config.seed = parse_var(&lookup, ENV_SEED)?;
        Ok(config)
    }

    pub fn gravity(&self) -> Gravity {
        Gravity {
            normal_ms: self.gravity_ms,
            soft_drop_ms: self.soft_drop_ms,
        }
    }
}

fn parse_var(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<Option<u32>> {
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map(Some)
            .with_context(|| format!("{name} must be a non-negative integer, got {raw:?}")),
    }
}
