//! Wayfarer CLI Application
//!
//! Command-line interface for the wayfarer trip planning tool.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use wayfarer_core::TripPlannerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { store_file, no_color, command } = Args::parse();

    let planner = TripPlannerBuilder::new()
        .with_store_path(store_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(planner, renderer);

    info!("Wayfarer started");

    match command {
        Some(Plan(args)) => cli.handle_plan(args).await,
        Some(Open(args)) => cli.handle_open(args).await,
        Some(Share(args)) => cli.handle_share(args).await,
        Some(Reorder(args)) => cli.handle_reorder(args).await,
        Some(Prioritize(args)) => cli.handle_prioritize(args).await,
        Some(Flight(args)) => cli.handle_flight(args).await,
        Some(Save(args)) => cli.handle_save(args).await,
        Some(Trips) => cli.handle_trips().await,
        Some(Load(args)) => cli.handle_load(args).await,
        Some(Prefs { command }) => cli.handle_prefs(command).await,
        Some(Clear) => cli.handle_clear().await,
        Some(Show) | None => cli.handle_show().await,
    }
}
