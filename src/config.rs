// NEXTGEN Studio Configuration
// Copyright (c) 2026 Xing_The_Creator | SYNOID
//
// Defaults, then environment (after .env is loaded by main), then CLI flags.

use anyhow::{Context, Result};
use std::time::Duration;
use tracing::info;

use crate::studio::generator::DEFAULT_DELAY;

pub const DELAY_ENV: &str = "NEXTGEN_DELAY_MS";

#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    pub generation_delay: Duration,
    pub window_size: [f32; 2],
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            generation_delay: DEFAULT_DELAY,
            window_size: [1100.0, 820.0],
        }
    }
}

impl StudioConfig {
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var(DELAY_ENV).ok();
        Self::from_delay_var(raw.as_deref())
    }

    fn from_delay_var(raw: Option<&str>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(raw) = raw {
            let ms: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be milliseconds, got '{}'", DELAY_ENV, raw))?;
            config.generation_delay = Duration::from_millis(ms);
            info!("[CONFIG] Generation delay from {}: {}ms", DELAY_ENV, ms);
        }
        Ok(config)
    }

    pub fn with_delay_override(mut self, delay_ms: Option<u64>) -> Self {
        if let Some(ms) = delay_ms {
            self.generation_delay = Duration::from_millis(ms);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay_is_two_seconds() {
        let config = StudioConfig::from_delay_var(None).unwrap();
        assert_eq!(config.generation_delay, Duration::from_secs(2));
    }

    #[test]
    fn test_env_delay() {
        let config = StudioConfig::from_delay_var(Some(" 250 ")).unwrap();
        assert_eq!(config.generation_delay, Duration::from_millis(250));
    }

    #[test]
    fn test_env_delay_rejects_garbage() {
        let err = StudioConfig::from_delay_var(Some("soon")).unwrap_err();
        assert!(err.to_string().contains(DELAY_ENV));
    }

    #[test]
    fn test_cli_overrides_env() {
        let config = StudioConfig::from_delay_var(Some("250"))
            .unwrap()
            .with_delay_override(Some(0));
        assert_eq!(config.generation_delay, Duration::ZERO);

        let untouched = StudioConfig::default().with_delay_override(None);
        assert_eq!(untouched, StudioConfig::default());
    }
}
