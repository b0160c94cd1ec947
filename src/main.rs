use anyhow::{anyhow, Result};
use todolist::config::Config;
use todolist::logger::{self, Logger};
use todolist::ui;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--init-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;

    let log_buffer = Logger::new();
    logger::init(&config.logging, &log_buffer).map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

    // Run the TUI application
    ui::run_app(&config, log_buffer).await?;

    Ok(())
}
