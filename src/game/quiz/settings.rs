use anyhow::{anyhow, Context, Result};
use std::env;
use std::time::Duration;

const SAMPLE_SIZE_VAR: &str = "ATLAS_QUIZ_SAMPLE_SIZE";
const TICK_MS_VAR: &str = "ATLAS_QUIZ_TICK_MS";

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub sample_size: usize,
    pub tick_interval: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            sample_size: 10,
            tick_interval: Duration::from_secs(1),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Settings::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self> {
        let mut settings = Settings::default();

        if let Some(value) = lookup(SAMPLE_SIZE_VAR) {
            let sample_size: usize = value
                .trim()
                .parse()
                .with_context(|| format!("{} must be a number", SAMPLE_SIZE_VAR))?;
            if sample_size == 0 {
                return Err(anyhow!("{} must be at least 1", SAMPLE_SIZE_VAR));
            }
            settings.sample_size = sample_size;
        }

        if let Some(value) = lookup(TICK_MS_VAR) {
            let millis: u64 = value
                .trim()
                .parse()
                .with_context(|| format!("{} must be a number of milliseconds", TICK_MS_VAR))?;
            settings.tick_interval = Duration::from_millis(millis.max(1));
        }

        Ok(settings)
    }
}
