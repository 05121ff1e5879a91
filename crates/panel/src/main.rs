// Binary crate: errors surface through anyhow at the top level.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use eink_components::icon::IconSet;
use eink_emulator::{DisplayDriver, PngDisplay};
use eink_specs::displays::INKY_IMPRESSION_7_3;
use feeds::fetch::HttpFetcher;
use panel::{PanelPlan, RefreshController};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "panel")]
#[command(about = "E-paper status panel fed from JSON sources", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file
    #[arg(short, long, default_value = "panel.toml")]
    config: PathBuf,
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long)]
    debug: bool,
    /// Fetch, draw and present once, then exit
    #[arg(long)]
    once: bool,
    /// Write frames here instead of the configured output
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Append logs to this file instead of stdout
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Install the subscriber; `RUST_LOG` overrides the default filter
fn init_tracing(debug: bool, log_file: Option<&PathBuf>) -> Result<()> {
    let default = if debug {
        "panel=debug,feeds=debug,eink_emulator=debug,eink_components=debug"
    } else {
        "panel=info,feeds=info,eink_emulator=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    match log_file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_target(true))
                .init();
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug, cli.log_file.as_ref())?;

    let mut plan = PanelPlan::load(&cli.config)
        .with_context(|| format!("invalid configuration {}", cli.config.display()))?;
    if let Some(output) = cli.output {
        plan.display.output = output;
    }

    let icons = match &plan.icons {
        Some(settings) => IconSet::load_dir(&settings.dir, settings.invert),
        None => IconSet::new(),
    };
    let fetcher = HttpFetcher::new(plan.fetch_timeout).context("cannot build HTTP client")?;
    let driver = PngDisplay::new(&INKY_IMPRESSION_7_3, plan.display.clone());
    tracing::info!(
        display = INKY_IMPRESSION_7_3.name,
        output = %plan.display.output.display(),
        "panel starting"
    );

    let mut controller = RefreshController::new(plan, icons, fetcher, driver);
    if cli.once {
        let presented = controller.start(&Local::now()).await;
        controller
            .driver_mut()
            .sleep()
            .await
            .context("display did not enter sleep")?;
        anyhow::ensure!(presented, "frame was not presented");
        return Ok(());
    }

    controller.run().await;
    Ok(())
}
