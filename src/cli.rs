use std::path::PathBuf;

use clap::Parser;

/// Page through a remote collection while keeping a persistent selection.
#[derive(Debug, Clone, Parser)]
#[command(name = "pagesel", version, about)]
pub struct Cli {
    /// Config file (defaults to <config dir>/pagesel/config.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Browse a generated in-memory collection of this many records instead
    /// of the remote endpoint
    #[arg(long, value_name = "RECORDS")]
    pub demo: Option<usize>,

    /// Records per page, overriding `paging.default_page_size`
    #[arg(long, value_name = "N")]
    pub page_size: Option<u32>,

    /// Collection endpoint, overriding `source.base_url`
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Also write logs to <data dir>/pagesel/logs/pagesel.log
    #[arg(long)]
    pub log_file: bool,
}
