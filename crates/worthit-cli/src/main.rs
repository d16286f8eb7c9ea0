use clap::Parser;
use worthit_core::{config, logging};

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Config first so its log filter applies; report what happened once logging is up.
    let loaded = config::load_or_init();
    let filter = loaded
        .as_ref()
        .ok()
        .and_then(|l| l.config.log_filter.clone());
    if let Err(err) = logging::init_logging(filter.as_deref()) {
        logging::init_logging_stderr(filter.as_deref());
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }
    match &loaded {
        Ok(l) if l.created => tracing::info!("created default config at {}", l.path.display()),
        Ok(_) => {}
        Err(err) => tracing::warn!("config unavailable: {:#}", err),
    }

    if let Err(err) = cli.command.run(loaded.map(|l| l.config)).await {
        eprintln!("worthit error: {:#}", err);
        std::process::exit(1);
    }
}
