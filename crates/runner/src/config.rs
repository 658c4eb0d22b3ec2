//! Runner configuration

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use presentr_domain::{Rect, Size};
use presentr_layout::PresentationSettings;

/// Runner configuration loaded from environment
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Container the presets are laid out in
    pub container: Rect,
    /// Measured content size handed to the dynamic presets
    pub content_size: Option<Size>,
    /// Optional JSON file with presentation settings
    pub settings_path: Option<PathBuf>,
}

impl RunnerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let width = parse_var("PRESENTR_CONTAINER_WIDTH")?.unwrap_or(320.0);
        let height = parse_var("PRESENTR_CONTAINER_HEIGHT")?.unwrap_or(480.0);

        let content_size = match (
            parse_var("PRESENTR_CONTENT_WIDTH")?,
            parse_var("PRESENTR_CONTENT_HEIGHT")?,
        ) {
            (Some(width), Some(height)) => Some(Size::new(width, height)),
            (None, None) => None,
            _ => anyhow::bail!(
                "PRESENTR_CONTENT_WIDTH and PRESENTR_CONTENT_HEIGHT must be set together"
            ),
        };

        Ok(Self {
            container: Rect::new(0.0, 0.0, width, height),
            content_size,
            settings_path: env::var("PRESENTR_SETTINGS_PATH").ok().map(PathBuf::from),
        })
    }

    /// Settings from `settings_path`, or defaults when unset
    pub fn load_settings(&self) -> Result<PresentationSettings> {
        let Some(path) = &self.settings_path else {
            return Ok(PresentationSettings::default());
        };

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        PresentationSettings::from_json(&json)
            .with_context(|| format!("Invalid settings in {}", path.display()))
    }
}

fn parse_var(name: &str) -> Result<Option<f64>> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} must be a number", name)),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_var() {
        env::set_var("PRESENTR_TEST_PARSE_NUMBER", " 12.5 ");
        env::set_var("PRESENTR_TEST_PARSE_GARBAGE", "wide");

        assert_eq!(
            parse_var("PRESENTR_TEST_PARSE_NUMBER").expect("number"),
            Some(12.5)
        );
        assert!(parse_var("PRESENTR_TEST_PARSE_GARBAGE").is_err());
        assert_eq!(
            parse_var("PRESENTR_TEST_PARSE_UNSET").expect("unset is fine"),
            None
        );
    }

    #[test]
    fn test_default_settings_without_path() {
        let config = RunnerConfig {
            container: Rect::new(0.0, 0.0, 320.0, 480.0),
            content_size: None,
            settings_path: None,
        };
        assert_eq!(
            config.load_settings().expect("defaults"),
            PresentationSettings::default()
        );
    }

    #[test]
    fn test_missing_settings_file_is_an_error() {
        let config = RunnerConfig {
            container: Rect::new(0.0, 0.0, 320.0, 480.0),
            content_size: None,
            settings_path: Some(PathBuf::from("/nonexistent/presentr-settings.json")),
        };
        let err = config.load_settings().expect_err("missing file");
        assert!(err.to_string().contains("Failed to read settings"));
    }
}
