//! Engine configuration that callers can serialize/deserialize.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Matching strategy for the nested loops join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinMode {
    /// Every matching (left, right) pair is produced.
    #[default]
    Full,
    /// One probe per right row; the left cursor only rewinds when the left
    /// side is exhausted, so some matching pairs are skipped.
    SingleProbe,
}

impl FromStr for JoinMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(JoinMode::Full),
            "single_probe" | "single-probe" => Ok(JoinMode::SingleProbe),
            other => Err(Error::Config(format!("unknown join mode '{other}'"))),
        }
    }
}

impl fmt::Display for JoinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinMode::Full => f.write_str("full"),
            JoinMode::SingleProbe => f.write_str("single_probe"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Join matching strategy.
    pub join_mode: JoinMode,

    /// Expected row count for materializing operators; pre-sizes the sort buffer.
    pub sort_capacity_hint: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            join_mode: JoinMode::Full,
            sort_capacity_hint: None,
        }
    }
}

impl EngineConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `ROWFLOW_JOIN_MODE`: `full` or `single_probe`
    /// - `ROWFLOW_SORT_CAPACITY_HINT`: expected rows per sort, > 0
    ///
    /// Values that do not parse or do not validate are ignored.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(s) = var("ROWFLOW_JOIN_MODE") {
            if let Ok(v) = s.parse::<JoinMode>() {
                cfg.join_mode = v;
            }
        }

        if let Some(s) = var("ROWFLOW_SORT_CAPACITY_HINT") {
            if let Ok(v) = s.trim().parse::<usize>() {
                let candidate = Self {
                    sort_capacity_hint: Some(v),
                    ..cfg.clone()
                };
                if candidate.validate().is_ok() {
                    cfg = candidate;
                }
            }
        }

        cfg
    }

    /// Parse a JSON document; missing keys take their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sort_capacity_hint == Some(0) {
            return Err(Error::Config("sort_capacity_hint must be > 0".into()));
        }
        Ok(())
    }
}
