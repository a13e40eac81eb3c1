mod bootstrap;
mod cli;
mod shell;

use clap::Parser;
use tracing::{error, info};

use bootstrap::{init_tracing_subscriber, resolve_config, wire_session, WiredSession};
use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 日志初始化失败不影响运行
    if let Err(e) = init_tracing_subscriber(cli.log_file) {
        eprintln!("Failed to initialize tracing: {e}");
    }

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %format!("{e:#}"), "Failed to load configuration");
            return Err(e);
        }
    };
    info!(
        base_url = %config.source.base_url,
        page_size = config.paging.default_page_size,
        demo = ?cli.demo,
        "pagesel starting"
    );

    let WiredSession { session, events } = wire_session(&config, cli.demo)?;
    shell::run(session, events, config.source.fields.clone()).await
}
