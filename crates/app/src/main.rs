mod config;
mod html;
mod queries;
mod scene;
mod server;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    let config = config::AppConfig::from_env();
    info!(
        "serving the workshop map on {}:{} (data dir: {})",
        config.bind_address,
        config.port,
        config.data_dir.display()
    );

    server::serve(config)
}
