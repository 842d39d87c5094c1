mod app;
mod config;
mod domain;
mod models;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gpui::{App, Application};
use log::info;

use crate::config::BoardConfig;

/// Two-player chess board
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the JSON schema of the config file and exit
    #[arg(long)]
    print_config_schema: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.print_config_schema {
        println!("{}", BoardConfig::schema_json()?);
        return Ok(());
    }

    let config = BoardConfig::load(args.config.as_deref())?;
    info!("starting with {config:?}");

    Application::new().run(move |cx: &mut App| app::run(cx, config));
    Ok(())
}
