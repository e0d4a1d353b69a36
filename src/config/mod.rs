use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub query: QueryConfig,
    pub hierarchy: HierarchyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Page size applied when a request supplies none (or a non-positive one).
    pub default_page_size: i32,
    /// Hard ceiling on the page size a single request may ask for.
    pub max_page_size: Option<i32>,
    pub debug_logging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HierarchyConfig {
    /// Emit a warning when a recalculation pass finds looping manager chains.
    pub warn_on_cycles: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        // Load .env file if present before reading anything else
        dotenvy::dotenv().ok();

        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Query overrides
        if let Ok(v) = env::var("QUERY_DEFAULT_PAGE_SIZE") {
            self.query.default_page_size = v.parse().unwrap_or(self.query.default_page_size);
        }
        if let Ok(v) = env::var("QUERY_MAX_PAGE_SIZE") {
            self.query.max_page_size = v.parse().ok();
        }
        if let Ok(v) = env::var("QUERY_DEBUG_LOGGING") {
            self.query.debug_logging = v.parse().unwrap_or(self.query.debug_logging);
        }

        // Hierarchy overrides
        if let Ok(v) = env::var("HIERARCHY_WARN_ON_CYCLES") {
            self.hierarchy.warn_on_cycles = v.parse().unwrap_or(self.hierarchy.warn_on_cycles);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            query: QueryConfig {
                default_page_size: 10,
                max_page_size: Some(100),
                debug_logging: true,
            },
            hierarchy: HierarchyConfig {
                warn_on_cycles: true,
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            query: QueryConfig {
                default_page_size: 10,
                max_page_size: Some(100),
                debug_logging: true,
            },
            hierarchy: HierarchyConfig {
                warn_on_cycles: true,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            query: QueryConfig {
                default_page_size: 10,
                max_page_size: Some(100),
                debug_logging: false,
            },
            hierarchy: HierarchyConfig {
                warn_on_cycles: true,
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_development_config() {
        let config = AppConfig::development();
        assert_eq!(config.query.default_page_size, 10);
        assert_eq!(config.query.max_page_size, Some(100));
        assert!(config.query.debug_logging);
    }

    #[test]
    fn test_default_production_config() {
        let config = AppConfig::production();
        assert!(!config.query.debug_logging);
        assert!(config.hierarchy.warn_on_cycles);
    }
}
