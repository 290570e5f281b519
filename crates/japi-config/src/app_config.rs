//! Application configuration structures.

use japi_core::{LinkStyle, OffsetPagination, TelemetryConfig};
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Pagination defaults for list responses.
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Logging configuration.
    #[serde(default)]
    pub observability: TelemetryConfig,
}

/// Application metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "japi".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Pagination configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Page size used when the request asks for none, and the ceiling for
    /// any size it does ask for.
    pub default_limit: u64,
    /// Representation of generated link values.
    pub link_style: LinkStyle,
}

impl PaginationConfig {
    /// Default page size.
    pub const DEFAULT_LIMIT: u64 = 20;

    /// Creates the paginator for one list request.
    #[must_use]
    pub fn paginator(&self, url: impl Into<String>, total: u64) -> OffsetPagination {
        OffsetPagination::new(url, self.default_limit, total).with_link_style(self.link_style)
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: Self::DEFAULT_LIMIT,
            link_style: LinkStyle::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use japi_core::{LinkValue, PageLink};

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.app.name, "japi");
        assert_eq!(config.pagination.default_limit, 20);
        assert_eq!(config.pagination.link_style, LinkStyle::Plain);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_paginator_uses_configured_values() {
        let config = PaginationConfig {
            default_limit: 10,
            link_style: LinkStyle::Object,
        };

        let pagination = config.paginator("/users", 25);
        assert_eq!(pagination.limit, 10);
        assert_eq!(pagination.total, 25);

        let links = pagination.generate().unwrap();
        assert!(matches!(links.get(PageLink::Last), Some(LinkValue::Object(_))));
        assert_eq!(links.href(PageLink::Last), Some("/users?page[limit]=10&page[offset]=20"));
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [pagination]
            link_style = "object"
            "#,
        )
        .unwrap();

        assert_eq!(config.pagination.default_limit, PaginationConfig::DEFAULT_LIMIT);
        assert_eq!(config.pagination.link_style, LinkStyle::Object);
        assert_eq!(config.app, AppMetadata::default());
    }
}
