mod alert;
mod chain;
mod cli;
mod config;
mod error;
mod handler;
mod logging;
mod monitor;
mod schedule;
mod ui;

use std::io::IsTerminal;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use cli::{Cli, Command};
use config::WatchConfig;
use handler::{MonitorContext, Trigger, handler};
use monitor::{ChainPort, list_jobs};
use schedule::{Schedule, shutdown_on};
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::subscriber(
        logging::default_filter(cli.verbose),
        std::io::stderr,
        std::io::stderr().is_terminal(),
    )
    .init();

    let interval = match &cli.command {
        Command::Watch { interval, .. } => *interval,
        _ => None,
    };
    let config = WatchConfig::load(cli.config.as_deref())
        .context("failed to load configuration")?
        .with_overrides(cli.window, cli.network.clone(), interval);
    let ctx = MonitorContext::from_config(&config)?;

    match cli.command {
        Command::Check { json } => {
            let progress = (!json).then(|| {
                ui::CycleProgress::start(&format!(
                    "Checking jobs on {} over the last {} blocks",
                    ctx.network,
                    ctx.window.size()
                ))
            });
            let result = handler(&ctx, Trigger::Manual, Utc::now()).await;
            if let Some(progress) = &progress {
                progress.complete(&result);
            }
            let report = result?;
            if json {
                ui::print_report_json(&report)?;
            }
        }
        Command::Watch { cycles, .. } => {
            let schedule = Schedule {
                every: Duration::from_secs(config.interval_secs),
                max_cycles: cycles,
            };
            let shutdown = shutdown_on(tokio::signal::ctrl_c());
            schedule.run(&ctx, shutdown).await;
        }
        Command::Jobs => {
            let jobs = list_jobs(&ctx.sequencer).await?;
            ui::print_jobs(ctx.sequencer.address(), &jobs);
        }
        Command::Head => {
            let block = ctx.chain.block_number().await?;
            ui::print_head(block);
        }
    }

    Ok(())
}
