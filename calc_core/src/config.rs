//! # Site Configuration
//!
//! Values that shape page metadata: the site name appended to titles, the
//! base URL for canonical links and the defaults used for pages without a
//! descriptor. Loaded from TOML; every field has a default, so an empty
//! file is a valid configuration.
//!
//! ```toml
//! site_name = "Calcfolio"
//! base_url = "https://calcfolio.example"
//! default_keywords = ["calculator", "online calculator"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    /// Scheme and host, no trailing slash required
    pub base_url: String,
    pub default_title: String,
    pub default_description: String,
    pub default_keywords: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Calcfolio".to_string(),
            base_url: "https://calcfolio.app".to_string(),
            default_title: "Free Online Calculators".to_string(),
            default_description: "A directory of free calculators for math, finance, health, gaming and science."
                .to_string(),
            default_keywords: vec![
                "calculator".to_string(),
                "online calculator".to_string(),
                "free calculator".to_string(),
            ],
        }
    }
}

impl SiteConfig {
    pub fn from_toml_str(content: &str) -> CalcResult<Self> {
        let config: SiteConfig =
            toml::from_str(content).map_err(|e| CalcError::config(format!("TOML parsing error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> CalcResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CalcError::config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Load `path` if given, falling back to defaults with a warning when
    /// the file is missing or invalid.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::from_file(path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded site config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "using default site config: {}", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        if self.site_name.trim().is_empty() {
            return Err(CalcError::config("site_name must not be empty"));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(CalcError::config(format!(
                "base_url '{}' must start with http:// or https://",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Absolute URL for a site path
    pub fn canonical(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path == "/" || path.is_empty() {
            format!("{}/", base)
        } else {
            format!("{}/{}", base, path.trim_start_matches('/'))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_toml_str("site_name = \"Calc Hub\"\nbase_url = \"http://localhost:8080/\"").unwrap();
        assert_eq!(config.site_name, "Calc Hub");
        assert_eq!(config.canonical("/math/riemann-sum"), "http://localhost:8080/math/riemann-sum");
        assert_eq!(config.canonical("/"), "http://localhost:8080/");
        assert_eq!(config.default_title, SiteConfig::default().default_title);
    }

    #[test]
    fn test_validation() {
        let err = SiteConfig::from_toml_str("site_name = \"  \"").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert!(SiteConfig::from_toml_str("base_url = \"ftp://example.com\"").is_err());
        assert!(SiteConfig::from_toml_str("site_name = 3").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = SiteConfig::load_or_default(Some(Path::new("/definitely/not/here.toml")));
        assert_eq!(config, SiteConfig::default());
        assert_eq!(SiteConfig::load_or_default(None), SiteConfig::default());
    }
}
