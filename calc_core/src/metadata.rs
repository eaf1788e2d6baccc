//! Page metadata: the title, description, canonical URL and keywords a
//! shell puts in its page head (or window title and status bar).

use serde::{Deserialize, Serialize};

use crate::catalog::{CalculatorDescriptor, CategoryDescriptor};
use crate::config::SiteConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub keywords: Vec<String>,
}

impl PageMetadata {
    /// Home page, also the fallback for unknown routes
    pub fn site_default(config: &SiteConfig) -> Self {
        Self {
            title: format!("{} | {}", config.default_title, config.site_name),
            description: config.default_description.clone(),
            canonical: config.canonical("/"),
            keywords: config.default_keywords.clone(),
        }
    }

    pub fn for_category(config: &SiteConfig, category: &CategoryDescriptor) -> Self {
        let mut keywords = vec![format!("{} calculators", category.name.to_lowercase())];
        keywords.extend(config.default_keywords.iter().cloned());
        Self {
            title: format!("{} Calculators | {}", category.name, config.site_name),
            description: category.description.to_string(),
            canonical: config.canonical(category.slug),
            keywords,
        }
    }

    pub fn for_calculator(config: &SiteConfig, calculator: &CalculatorDescriptor) -> Self {
        let mut keywords: Vec<String> = calculator.keywords.iter().map(|k| k.to_string()).collect();
        keywords.push(calculator.category.descriptor().name.to_lowercase());
        keywords.push("calculator".to_string());
        keywords.dedup();
        Self {
            title: format!("{} | {}", calculator.title, config.site_name),
            description: calculator.description.to_string(),
            canonical: config.canonical(&calculator.path()),
            keywords,
        }
    }

    pub fn keywords_joined(&self) -> String {
        self.keywords.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find_calculator, CategorySlug};

    #[test]
    fn test_calculator_metadata() {
        let config = SiteConfig::default();
        let bmi = find_calculator("bmi").unwrap();
        let meta = PageMetadata::for_calculator(&config, bmi);
        assert_eq!(meta.title, "BMI Calculator | Calcfolio");
        assert_eq!(meta.canonical, "https://calcfolio.app/health/bmi");
        assert!(meta.keywords.contains(&"health".to_string()));
        assert!(meta.keywords_joined().starts_with("bmi, "));
    }

    #[test]
    fn test_category_metadata() {
        let config = SiteConfig::default();
        let meta = PageMetadata::for_category(&config, CategorySlug::Gaming.descriptor());
        assert_eq!(meta.title, "Gaming Calculators | Calcfolio");
        assert_eq!(meta.canonical, "https://calcfolio.app/gaming");
        assert_eq!(meta.keywords[0], "gaming calculators");
    }

    #[test]
    fn test_default_metadata_uses_config() {
        let config = SiteConfig {
            site_name: "Calc Hub".to_string(),
            ..SiteConfig::default()
        };
        let meta = PageMetadata::site_default(&config);
        assert!(meta.title.ends_with("| Calc Hub"));
        assert_eq!(meta.keywords, config.default_keywords);
    }
}
