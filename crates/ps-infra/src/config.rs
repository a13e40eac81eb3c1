//! # Configuration Loader
//!
//! Reads the TOML file into a [`BrowseConfig`], fills keys the file left
//! empty from the built-in defaults, and checks the paging values.

use anyhow::{bail, Context};
use ps_core::config::BrowseConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// `<config dir>/pagesel/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pagesel").join("config.toml"))
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file cannot be read, is not valid TOML, or the
/// resulting paging values are inconsistent.
pub fn load_config(config_path: &Path) -> anyhow::Result<BrowseConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    let raw = BrowseConfig::from_toml(&toml_value)?;

    let config = apply_defaults(raw, BrowseConfig::with_defaults());
    validate(&config)?;
    debug!(path = %config_path.display(), "Loaded config file");
    Ok(config)
}

/// Use `explicit` when given (it must exist), else the default path when it
/// exists, else the built-in defaults.
pub fn load_or_default(explicit: Option<&Path>) -> anyhow::Result<BrowseConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    match default_config_path() {
        Some(path) if path.exists() => load_config(&path),
        _ => {
            info!("No config file found, using built-in defaults");
            Ok(BrowseConfig::with_defaults())
        }
    }
}

/// Replace empty/zero values in `raw` with the corresponding `defaults`.
pub fn apply_defaults(raw: BrowseConfig, defaults: BrowseConfig) -> BrowseConfig {
    let mut config = raw;
    if config.source.base_url.is_empty() {
        config.source.base_url = defaults.source.base_url;
    }
    if config.source.timeout_secs == 0 {
        config.source.timeout_secs = defaults.source.timeout_secs;
    }
    if config.source.user_agent.is_empty() {
        config.source.user_agent = defaults.source.user_agent;
    }
    if config.source.fields.is_empty() {
        config.source.fields = defaults.source.fields;
    }
    if config.paging.default_page_size == 0 {
        config.paging.default_page_size = defaults.paging.default_page_size;
    }
    if config.paging.max_page_size == 0 {
        config.paging.max_page_size = defaults.paging.max_page_size;
    }
    config
}

/// Largest accepted `paging.max_page_size`. Also catches negative TOML values,
/// which the DTO truncates to huge unsigned ones.
pub const MAX_PAGE_SIZE_LIMIT: u32 = 1000;

pub fn validate(config: &BrowseConfig) -> anyhow::Result<()> {
    if config.paging.max_page_size > MAX_PAGE_SIZE_LIMIT {
        bail!(
            "max_page_size ({}) must be between 1 and {}",
            config.paging.max_page_size,
            MAX_PAGE_SIZE_LIMIT
        );
    }
    if config.paging.default_page_size > config.paging.max_page_size {
        bail!(
            "default_page_size ({}) exceeds max_page_size ({})",
            config.paging.default_page_size,
            config.paging.max_page_size
        );
    }
    if !config.source.base_url.starts_with("http://") && !config.source.base_url.starts_with("https://") {
        bail!("source.base_url must be an http(s) URL, got {:?}", config.source.base_url);
    }
    Ok(())
}
