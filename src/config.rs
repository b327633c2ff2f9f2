use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::constants::{
    DEFAULT_COUNT_TIMEOUT_SECS, DEFAULT_PER_PAGE, MAX_PER_PAGE, SEARCH_PLACEHOLDER,
};
use crate::error::ConfigError;
use crate::query::PageLimits;
use crate::settings::ViewMode;

/// Pager configuration.
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PagerConfig {
    /// Page size used when `limit` is absent or unparsable.
    pub default_per_page: u32,
    /// Largest page size a URL may request. Capped at 50.
    pub max_per_page: u32,
    /// Seconds before an unresolved count fetch is abandoned.
    pub count_timeout_secs: u64,
    /// View mode a fresh settings context starts in.
    pub default_view_mode: ViewMode,
    /// Placeholder text for the search input.
    pub search_placeholder: String,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: MAX_PER_PAGE,
            count_timeout_secs: DEFAULT_COUNT_TIMEOUT_SECS,
            default_view_mode: ViewMode::default(),
            search_placeholder: SEARCH_PLACEHOLDER.to_string(),
        }
    }
}

impl PagerConfig {
    /// Parse configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or has fields of
    /// the wrong type.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Load configuration from a TOML file and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_per_page == 0 || self.max_per_page > MAX_PER_PAGE {
            return Err(ConfigError::InvalidValue {
                name: "max_per_page".to_string(),
                message: format!("must be between 1 and {MAX_PER_PAGE}"),
            });
        }
        if self.default_per_page == 0 || self.default_per_page > self.max_per_page {
            return Err(ConfigError::InvalidValue {
                name: "default_per_page".to_string(),
                message: format!("must be between 1 and {}", self.max_per_page),
            });
        }
        if self.count_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                name: "count_timeout_secs".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn page_limits(&self) -> PageLimits {
        PageLimits {
            default_per_page: self.default_per_page,
            max_per_page: self.max_per_page,
        }
    }

    #[must_use]
    pub fn count_timeout(&self) -> Duration {
        Duration::from_secs(self.count_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = PagerConfig::from_toml_str("").unwrap();
        assert_eq!(config, PagerConfig::default());
        assert_eq!(config.max_per_page, 50);
        assert_eq!(config.default_per_page, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_max_per_page_above_cap() {
        let config =
            PagerConfig::from_toml_str("max_per_page = 500\ndefault_per_page = 200").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref name, .. } if name == "max_per_page"
        ));

        let config = PagerConfig::from_toml_str("max_per_page = 50").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_document_overrides_fields() {
        let config = PagerConfig::from_toml_str(
            r#"
            default_per_page = 20
            default_view_mode = "table"
            "#,
        )
        .unwrap();
        assert_eq!(config.default_per_page, 20);
        assert_eq!(config.max_per_page, 50);
        assert_eq!(config.default_view_mode, ViewMode::Table);
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let err = PagerConfig::from_toml_str("max_per_page = \"lots\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validate_rejects_zero_max() {
        let config = PagerConfig {
            max_per_page: 0,
            ..PagerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { name, .. }) if name == "max_per_page"
        ));
    }

    #[test]
    fn test_validate_rejects_default_above_max() {
        let config = PagerConfig {
            default_per_page: 60,
            ..PagerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { name, .. }) if name == "default_per_page"
        ));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = PagerConfig {
            count_timeout_secs: 0,
            ..PagerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_page_limits_and_timeout() {
        let config = PagerConfig::default();
        assert_eq!(config.page_limits(), PageLimits::default());
        assert_eq!(config.count_timeout(), Duration::from_secs(30));
    }
}
