//! Crisis Ops Console - a TUI console for city crisis response planning
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use crisis_ops::common::prelude::*;
use crisis_ops::config;

/// Crisis Ops Console - a TUI console for city crisis response planning
#[derive(Parser, Debug)]
#[command(name = "crisops")]
#[command(about = "A TUI console for city crisis response planning", long_about = None)]
struct Args {
    /// Backend base URL override (defaults to the configured value)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Directory that holds .crisisops/config.toml (defaults to the current directory)
    #[arg(long, value_name = "PATH")]
    config_dir: Option<PathBuf>,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_dir = args
        .config_dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init_config {
        config::init_config_dir(&config_dir)?;
        eprintln!(
            "Wrote default config to {}",
            config_dir.join(".crisisops").join("config.toml").display()
        );
        return Ok(());
    }

    let mut settings = config::load_settings(&config_dir);
    if let Some(url) = args.base_url {
        settings.backend.base_url = url;
    }

    crisis_ops::run(settings).await
}
