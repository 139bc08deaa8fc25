//! Site configuration compiled in from `data/site.json`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::media::MediaItem;

const SITE_JSON: &str = include_str!("../data/site.json");

pub const DEFAULT_AUTO_ADVANCE_MS: u32 = 4000;
pub const DEFAULT_TABLET_MIN_WIDTH: f64 = 768.0;
pub const DEFAULT_DESKTOP_MIN_WIDTH: f64 = 1200.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid site config: {0}")]
    Invalid(String),
}

/// Viewport widths at which the carousel shows more cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// From this width up, two cards.
    pub tablet: f64,
    /// From this width up, three cards.
    pub desktop: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            tablet: DEFAULT_TABLET_MIN_WIDTH,
            desktop: DEFAULT_DESKTOP_MIN_WIDTH,
        }
    }
}

impl Breakpoints {
    /// Cards visible at `width` CSS pixels.
    #[must_use]
    pub fn page_size(&self, width: f64) -> usize {
        if width < self.tablet {
            1
        } else if width < self.desktop {
            2
        } else {
            3
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub auto_advance_ms: u32,
    pub breakpoints: Breakpoints,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: DEFAULT_AUTO_ADVANCE_MS,
            breakpoints: Breakpoints::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub carousel: CarouselConfig,
    pub reels: Vec<MediaItem>,
}

impl SiteConfig {
    /// Load the configuration bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled JSON is malformed or fails validation.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(SITE_JSON)
    }

    /// # Errors
    ///
    /// Returns an error if `json` is malformed or fails validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a zero timer period or breakpoints
    /// that are not strictly increasing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.auto_advance_ms == 0 {
            return Err(ConfigError::Invalid(
                "auto_advance_ms must be positive".into(),
            ));
        }
        let Breakpoints { tablet, desktop } = self.carousel.breakpoints;
        if !(tablet > 0.0 && tablet < desktop) {
            return Err(ConfigError::Invalid(format!(
                "breakpoints must satisfy 0 < tablet < desktop (got {tablet} / {desktop})"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_lists_eight_reels() {
        let config = SiteConfig::embedded().expect("bundled config is valid");
        assert_eq!(config.reels.len(), 8);
        assert_eq!(config.reels[0].id, "YIOlYJsue7Y");
        assert_eq!(config.carousel.auto_advance_ms, 4000);
        assert_eq!(config.carousel.breakpoints, Breakpoints::default());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config.carousel, CarouselConfig::default());
        assert!(config.reels.is_empty());
    }

    #[test]
    fn inverted_breakpoints_are_rejected() {
        let err = SiteConfig::from_json(
            r#"{"carousel": {"breakpoints": {"tablet": 1200, "desktop": 768}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn zero_period_is_rejected() {
        let err = SiteConfig::from_json(r#"{"carousel": {"auto_advance_ms": 0}}"#).unwrap_err();
        assert!(err.to_string().contains("auto_advance_ms"));
    }

    #[test]
    fn malformed_json_surfaces_parse_error() {
        let err = SiteConfig::from_json("{").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
