//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML -> DTO mapping
//!
//! ## Prohibited
//!
//! **No validation and no defaulting in [`BrowseConfig::from_toml`].** Missing
//! keys map to empty values; filling them in is the loader's job.

use std::time::Duration;

/// Default record projection, matching the artwork table columns.
pub const DEFAULT_FIELDS: &[&str] = &[
    "title",
    "place_of_origin",
    "artist_display",
    "inscriptions",
    "date_start",
    "date_end",
];

pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1/artworks";

/// Browse configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseConfig {
    pub source: SourceConfig,
    pub paging: PagingConfig,
}

/// Where records come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Paged collection endpoint (empty when not configured)
    pub base_url: String,

    /// Per-request timeout in seconds (0 when not configured)
    pub timeout_secs: u64,

    pub user_agent: String,

    /// Display fields to request and keep. Empty keeps whatever the source sends.
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingConfig {
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl BrowseConfig {
    /// Create BrowseConfig from TOML value
    ///
    /// Must not contain validation or default value logic. Empty strings and
    /// zeroes are valid facts.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let source = toml_value.get("source");
        let paging = toml_value.get("paging");

        Ok(Self {
            source: SourceConfig {
                base_url: source
                    .and_then(|s| s.get("base_url"))
                    .and_then(|v| v.as_str())
                    .unwrap_or("")
                    .to_string(),
                timeout_secs: source
                    .and_then(|s| s.get("timeout_secs"))
                    .and_then(|v| v.as_integer())
                    .unwrap_or(0) as u64,
                user_agent: source
                    .and_then(|s| s.get("user_agent"))
                    .and_then(|v| v.as_str())
                    .unwrap_or("")
                    .to_string(),
                fields: source
                    .and_then(|s| s.get("fields"))
                    .and_then(|v| v.as_array())
                    .map(|items| {
                        items
                            .iter()
                            .filter_map(|item| item.as_str().map(str::to_string))
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            paging: PagingConfig {
                default_page_size: paging
                    .and_then(|p| p.get("default_page_size"))
                    .and_then(|v| v.as_integer())
                    .unwrap_or(0) as u32,
                max_page_size: paging
                    .and_then(|p| p.get("max_page_size"))
                    .and_then(|v| v.as_integer())
                    .unwrap_or(0) as u32,
            },
        })
    }

    /// Create empty BrowseConfig (all empty/zero values)
    pub fn empty() -> Self {
        Self {
            source: SourceConfig {
                base_url: String::new(),
                timeout_secs: 0,
                user_agent: String::new(),
                fields: Vec::new(),
            },
            paging: PagingConfig {
                default_page_size: 0,
                max_page_size: 0,
            },
        }
    }

    /// Built-in defaults: the public artworks endpoint, ten records per page.
    pub fn with_defaults() -> Self {
        Self {
            source: SourceConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                timeout_secs: 10,
                user_agent: concat!("pagesel/", env!("CARGO_PKG_VERSION")).to_string(),
                fields: DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect(),
            },
            paging: PagingConfig {
                default_page_size: 10,
                max_page_size: 100,
            },
        }
    }
}
