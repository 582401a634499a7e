//! usecases - browse the use case catalog from the terminal.

use catalog_browser::CatalogBrowser;
use catalog_cli::commands;
use catalog_cli::repl;
use catalog_cli::{Cli, Command, Config, Formatter};
use catalog_store::CatalogSource;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize tracing (log to stderr, RUST_LOG overrides)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> catalog_cli::Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => PathBuf::from(path),
        None => Config::path()?,
    };
    let mut config = Config::load_from(&config_path).unwrap_or_else(|e| {
        tracing::warn!("Ignoring config {}: {}", config_path.display(), e);
        Config::default()
    });

    // Command-line overrides
    if let Some(data) = cli.data {
        config.browser.data_source = data;
    }
    if let Some(mode) = cli.mode {
        config.browser.tag_mode = mode.into();
    }
    config
        .browser
        .validate()
        .map_err(catalog_cli::CliError::Config)?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    // One-time catalog load; failures leave the catalog empty
    let source = CatalogSource::from_location(&config.browser.data_source);
    let mut browser = CatalogBrowser::new(config.browser.clone());
    browser.load(&source).await;

    if browser.catalog().is_empty() {
        eprintln!(
            "{}",
            formatter.warning(&format!("No use cases loaded from {}", source))
        );
    }

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&mut browser, &config, &formatter)?;
        }
        Some(Command::List(args)) => {
            commands::execute_list(args, &mut browser, &formatter)?;
        }
        Some(Command::Tags(args)) => {
            commands::execute_tags(args, &browser, &formatter)?;
        }
        Some(Command::Show(args)) => {
            commands::execute_show(args, &browser, &formatter)?;
        }
    }

    Ok(())
}
