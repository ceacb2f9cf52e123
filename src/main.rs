use anyhow::{Context, Result};
use clap::Parser;

use weblinks::cli::{Cli, Commands};
use weblinks::config::StaticConfig;
use weblinks::runtime::modes;
use weblinks::system::init_logging;

#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config =
        StaticConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let _guard = init_logging(&config.logging)?;
            modes::run_server(&config).await
        }
        cmd => {
            // CLI 模式只输出警告及以上
            config.logging.level = "warn".to_string();
            let guard = init_logging(&config.logging)?;

            if let Err(e) = modes::run_cli(cmd, &config).await {
                eprintln!("{}", e.format_colored());
                drop(guard);
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
