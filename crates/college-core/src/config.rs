//! Site configuration (`site.toml`)
//!
//! The website embeds its `site.toml` at compile time. Every key has a
//! default, so a partial file is fine and a broken one falls back to
//! [`SiteConfig::default`].

use serde::{Deserialize, Serialize};

use crate::estimate::CURRENCY_LABEL;
use crate::navigation::DEFAULT_BREAKPOINT_PX;
use crate::prelude::*;
use crate::sponsorship::DEFAULT_FEEDBACK_DELAY_MS;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSettings,

    #[serde(default)]
    pub navigation: NavigationSettings,

    #[serde(default)]
    pub sponsorship: SponsorshipSettings,

    #[serde(default)]
    pub currency: CurrencySettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SiteSettings {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_tagline")]
    pub tagline: String,

    #[serde(default = "default_admissions_email")]
    pub admissions_email: String,

    #[serde(default = "default_phone")]
    pub phone: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: default_name(),
            tagline: default_tagline(),
            admissions_email: default_admissions_email(),
            phone: default_phone(),
        }
    }
}

fn default_name() -> String {
    "Riverside College".to_string()
}

fn default_tagline() -> String {
    "Practical skills for a digital Kenya.".to_string()
}

fn default_admissions_email() -> String {
    "admissions@riversidecollege.ac.ke".to_string()
}

fn default_phone() -> String {
    "+254 700 000 000".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavigationSettings {
    /// Viewport width at and above which the mobile menu is forced closed
    #[serde(default = "default_breakpoint_px")]
    pub breakpoint_px: u32,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            breakpoint_px: default_breakpoint_px(),
        }
    }
}

fn default_breakpoint_px() -> u32 {
    DEFAULT_BREAKPOINT_PX
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SponsorshipSettings {
    /// How long the "request sent" button stays up
    #[serde(default = "default_feedback_delay_ms")]
    pub feedback_delay_ms: u64,
}

impl Default for SponsorshipSettings {
    fn default() -> Self {
        Self {
            feedback_delay_ms: default_feedback_delay_ms(),
        }
    }
}

fn default_feedback_delay_ms() -> u64 {
    DEFAULT_FEEDBACK_DELAY_MS
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CurrencySettings {
    #[serde(default = "default_currency_label")]
    pub label: String,
}

impl Default for CurrencySettings {
    fn default() -> Self {
        Self {
            label: default_currency_label(),
        }
    }
}

fn default_currency_label() -> String {
    CURRENCY_LABEL.to_string()
}

impl SiteConfig {
    /// Parse and sanity-check a `site.toml` document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        if config.navigation.breakpoint_px == 0 {
            return Err(Error::config("navigation.breakpoint_px must be positive"));
        }
        Ok(config)
    }

    /// Like [`SiteConfig::from_toml_str`], but never fails.
    pub fn load(content: &str) -> Self {
        match Self::from_toml_str(content) {
            Ok(config) => {
                debug!("Loaded site configuration");
                config
            }
            Err(e) => {
                warn!("Failed to load site configuration, using defaults: {}", e);
                Self::default()
            }
        }
    }
}
