//! # Routing
//!
//! Maps URL paths to pages. The route table is derived once from the
//! catalog and the site config; resolving a path is a pure lookup.
//!
//! | Path                        | Route        |
//! |-----------------------------|--------------|
//! | `/`                         | Home         |
//! | `/{category}`               | Category     |
//! | `/{category}/{calculator}`  | Calculator   |
//! | `/{calculator}`             | Calculator (short link, canonical is the full path) |
//! | anything else               | NotFound, default metadata |
//!
//! ```rust
//! use calc_core::config::SiteConfig;
//! use calc_core::routing::{Route, Router};
//!
//! let router = Router::new(&SiteConfig::default());
//! let page = router.resolve("/Math/Riemann-Sum/?x=1");
//! assert!(matches!(page.route, Route::Calculator(c) if c.slug == "riemann-sum"));
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::{self, CalculatorDescriptor, CategorySlug, CALCULATORS, CATEGORIES};
use crate::config::SiteConfig;
use crate::metadata::PageMetadata;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "target")]
pub enum Route {
    Home,
    Category(CategorySlug),
    Calculator(&'static CalculatorDescriptor),
    NotFound(String),
}

impl Route {
    /// Canonical site path, `None` for unknown routes
    pub fn path(&self) -> Option<String> {
        match self {
            Route::Home => Some("/".to_string()),
            Route::Category(category) => Some(format!("/{}", category.as_str())),
            Route::Calculator(calculator) => Some(calculator.path()),
            Route::NotFound(_) => None,
        }
    }
}

/// A resolved route and the metadata for its page head
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPage {
    pub route: Route,
    pub metadata: PageMetadata,
}

#[derive(Debug, Clone)]
pub struct Router {
    home: PageMetadata,
    categories: HashMap<CategorySlug, PageMetadata>,
    calculators: HashMap<&'static str, PageMetadata>,
}

impl Router {
    pub fn new(config: &SiteConfig) -> Self {
        let categories = CATEGORIES
            .iter()
            .map(|c| (c.category, PageMetadata::for_category(config, c)))
            .collect();
        let calculators = CALCULATORS
            .iter()
            .map(|c| (c.slug, PageMetadata::for_calculator(config, c)))
            .collect();
        tracing::debug!(calculators = CALCULATORS.len(), "route table built");
        Self {
            home: PageMetadata::site_default(config),
            categories,
            calculators,
        }
    }

    /// Resolve a URL path. Never fails: unknown paths give
    /// [`Route::NotFound`] with the default metadata.
    pub fn resolve(&self, path: &str) -> ResolvedPage {
        let segments = normalize(path);
        let route = match segments.as_slice() {
            [] => Route::Home,
            [single] => match catalog::find_category(single) {
                Some(category) => Route::Category(category.category),
                None => catalog::find_calculator(single)
                    .map(Route::Calculator)
                    .unwrap_or_else(|| Route::NotFound(path.to_string())),
            },
            [category, slug] => match catalog::find_calculator(slug) {
                Some(calculator) if calculator.category.as_str() == category.as_str() => Route::Calculator(calculator),
                _ => Route::NotFound(path.to_string()),
            },
            _ => Route::NotFound(path.to_string()),
        };
        tracing::debug!(path, route = ?route.path(), "resolved route");
        let metadata = self.metadata_for(&route).clone();
        ResolvedPage { route, metadata }
    }

    pub fn metadata_for(&self, route: &Route) -> &PageMetadata {
        match route {
            Route::Home | Route::NotFound(_) => &self.home,
            Route::Category(category) => self.categories.get(category).unwrap_or(&self.home),
            Route::Calculator(calculator) => self.calculators.get(calculator.slug).unwrap_or(&self.home),
        }
    }

    /// Every canonical URL: home, categories, then calculators
    pub fn sitemap(&self) -> Vec<String> {
        let mut urls = vec![self.home.canonical.clone()];
        urls.extend(CategorySlug::ALL.iter().filter_map(|c| self.categories.get(c)).map(|m| m.canonical.clone()));
        urls.extend(CALCULATORS.iter().filter_map(|c| self.calculators.get(c.slug)).map(|m| m.canonical.clone()));
        urls
    }
}

/// Lowercased path segments with query, fragment and empty segments removed
pub fn normalize(path: &str) -> Vec<String> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Router {
        Router::new(&SiteConfig::default())
    }

    #[test]
    fn test_normalize() {
        assert!(normalize("/").is_empty());
        assert!(normalize("").is_empty());
        assert_eq!(normalize("//Math///Jacobian/"), vec!["math", "jacobian"]);
        assert_eq!(normalize("/finance?ref=nav#top"), vec!["finance"]);
    }

    #[test]
    fn test_home_and_categories() {
        let router = router();
        assert_eq!(router.resolve("/").route, Route::Home);
        for category in CategorySlug::ALL {
            let page = router.resolve(&format!("/{}", category.as_str()));
            assert_eq!(page.route, Route::Category(category));
            assert!(page.metadata.title.contains(category.descriptor().name));
        }
    }

    #[test]
    fn test_every_calculator_resolves_both_ways() {
        let router = router();
        for calculator in CALCULATORS {
            let full = router.resolve(&calculator.path());
            assert_eq!(full.route, Route::Calculator(calculator), "{}", calculator.slug);
            let short = router.resolve(calculator.slug);
            assert_eq!(short.route, full.route);
            assert_eq!(short.metadata.canonical, full.metadata.canonical);
            assert!(full.metadata.canonical.ends_with(&calculator.path()));
        }
    }

    #[test]
    fn test_unknown_paths_get_default_metadata() {
        let router = router();
        let default = PageMetadata::site_default(&SiteConfig::default());
        for path in ["/nope", "/math/bmi", "/health/bmi/extra", "/math/nope"] {
            let page = router.resolve(path);
            assert_eq!(page.route, Route::NotFound(path.to_string()), "{}", path);
            assert_eq!(page.metadata, default);
        }
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let a = router().resolve("/science/ph");
        let b = router().resolve("/SCIENCE/pH/");
        assert_eq!(a, b);
    }

    #[test]
    fn test_sitemap_covers_every_page() {
        let sitemap = router().sitemap();
        assert_eq!(sitemap.len(), 1 + CATEGORIES.len() + CALCULATORS.len());
        assert_eq!(sitemap[0], "https://calcfolio.app/");
    }
}
