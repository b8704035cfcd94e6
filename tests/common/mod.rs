#![allow(dead_code)]

use ui_wait_helper::prelude::*;

pub mod pages;

/// Suite configuration from the environment, defaulting to production.
pub fn config() -> Result<SuiteConfig, ConfigError> {
    SuiteConfig::from_lookup(|key| {
        std::env::var(key)
            .ok()
            .or_else(|| (key == SuiteConfig::ENVIRONMENT).then(|| "PROD".to_owned()))
    })
}
