//! Configuration management
//!
//! Settings live in an optional `registry.json` file:
//! ```json
//! { "minimumAge": 18, "reportLocale": "en" }
//! ```
//! Environment variables override the file (see [`Config::load`]).

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::MINIMUM_AGE;
use crate::services::ReportLocale;

/// Name of the settings file inside the registry directory
pub const SETTINGS_FILE: &str = "registry.json";

/// Default minimum age for new users; configured values below it are raised to it
pub const DEFAULT_MINIMUM_AGE: u32 = MINIMUM_AGE;

const MINIMUM_AGE_ENV: &str = "REGISTRY_MINIMUM_AGE";
const REPORT_LOCALE_ENV: &str = "REGISTRY_REPORT_LOCALE";

/// Raw registry.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    minimum_age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    report_locale: Option<ReportLocale>,
}

/// Registry configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Users younger than this are rejected at creation. Never below 18.
    pub minimum_age: u32,
    pub report_locale: ReportLocale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            minimum_age: DEFAULT_MINIMUM_AGE,
            report_locale: ReportLocale::default(),
        }
    }
}

impl Config {
    /// Load config from a registry directory
    ///
    /// Values come from, in order of precedence:
    /// 1. Environment variables REGISTRY_MINIMUM_AGE and REGISTRY_REPORT_LOCALE
    /// 2. registry.json in `dir`
    /// 3. Defaults
    ///
    /// An unreadable settings file falls back to defaults.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut config = Self::load_file(dir)?;
        config.apply_overrides(
            std::env::var(MINIMUM_AGE_ENV).ok().as_deref(),
            std::env::var(REPORT_LOCALE_ENV).ok().as_deref(),
        );
        Ok(config)
    }

    /// Load config from registry.json only, ignoring the environment
    pub fn load_file(dir: &Path) -> Result<Self> {
        let settings_path = dir.join(SETTINGS_FILE);

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        Ok(Self {
            minimum_age: raw
                .minimum_age
                .unwrap_or(DEFAULT_MINIMUM_AGE)
                .max(DEFAULT_MINIMUM_AGE),
            report_locale: raw.report_locale.unwrap_or_default(),
        })
    }

    /// Apply override values
    ///
    /// Unparseable values are ignored, ages below 18 are raised to 18.
    pub fn apply_overrides(&mut self, minimum_age: Option<&str>, report_locale: Option<&str>) {
        if let Some(age) = minimum_age.and_then(|v| v.trim().parse::<u32>().ok()) {
            self.minimum_age = age.max(DEFAULT_MINIMUM_AGE);
        }
        if let Some(locale) = report_locale.and_then(|v| ReportLocale::parse(v.trim())) {
            self.report_locale = locale;
        }
    }

    /// Save config to a registry directory
    pub fn save(&self, dir: &Path) -> Result<()> {
        let settings = SettingsFile {
            minimum_age: Some(self.minimum_age),
            report_locale: Some(self.report_locale),
        };

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(dir.join(SETTINGS_FILE), content)?;
        Ok(())
    }

    /// Set the minimum age, raised to 18 if lower
    pub fn with_minimum_age(mut self, minimum_age: u32) -> Self {
        self.minimum_age = minimum_age.max(DEFAULT_MINIMUM_AGE);
        self
    }

    /// Set the report locale
    pub fn with_report_locale(mut self, locale: ReportLocale) -> Self {
        self.report_locale = locale;
        self
    }
}
