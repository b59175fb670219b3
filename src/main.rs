#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portal_core::{LocalStore, ThemeController};

/// Default data directory when none is given on the command line
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("placement-portal")
}

/// Campus Placement Portal - job and internship openings by cohort
#[derive(Parser, Debug)]
#[command(name = "placement-portal-desktop")]
#[command(about = "Campus Placement Portal - openings by cohort with one-click apply")]
struct Args {
    /// Data directory for the local store (theme and registration counts)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log filter directive, e.g. "portal_core=debug,info" (overrides RUST_LOG)
    #[arg(short, long)]
    log_filter: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    portal_core::logging::init_logging(args.log_filter.as_deref())?;

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    tracing::info!("Starting with data dir: {:?}", data_dir);

    // Persistence is best-effort: the portal still works for this session
    let store = match LocalStore::in_dir(&data_dir) {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!(error = %e, "Local store unavailable, settings will not persist");
            LocalStore::in_memory()?
        }
    };

    // Paint the window in the saved theme before the first render
    let initial_theme = ThemeController::load(store.clone()).preference();

    let config = Config::new()
        .with_background_color(theme::colors::window_background(initial_theme))
        .with_window(
            WindowBuilder::new()
                .with_title("Campus Placement Portal")
                .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
                .with_resizable(true),
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(store)
        .launch(app::App);

    Ok(())
}
