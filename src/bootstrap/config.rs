//! Resolve the effective configuration: file (or defaults), then CLI overrides.

use anyhow::Context;
use ps_core::BrowseConfig;
use ps_infra::config::{load_or_default, validate};

use crate::cli::Cli;

pub fn resolve_config(cli: &Cli) -> anyhow::Result<BrowseConfig> {
    let config = load_or_default(cli.config.as_deref())?;
    let config = apply_overrides(config, cli);
    validate(&config).context("Invalid configuration after command line overrides")?;
    Ok(config)
}

fn apply_overrides(mut config: BrowseConfig, cli: &Cli) -> BrowseConfig {
    if let Some(page_size) = cli.page_size {
        config.paging.default_page_size = page_size;
    }
    if let Some(base_url) = &cli.base_url {
        config.source.base_url = base_url.clone();
    }
    config
}
