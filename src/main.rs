#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;
mod timers;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use dioxus::desktop::{Config, WindowBuilder};
use martian_dmv_core::Settings;
use tracing_subscriber::EnvFilter;

/// Launch options, set once from the command line
static LAUNCH: OnceLock<LaunchOptions> = OnceLock::new();

/// Which camera the photo booth talks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum CameraKind {
    /// Generated scanner feed
    #[default]
    Synthetic,
    /// No camera; the booth falls back to its placeholder portrait
    None,
}

/// Everything the app needs from startup.
#[derive(Clone, Debug)]
pub struct LaunchOptions {
    pub settings: Settings,
    pub seed: Option<u64>,
    pub camera: CameraKind,
}

/// Get the launch options (command line or defaults)
pub fn launch_options() -> &'static LaunchOptions {
    LAUNCH.get_or_init(|| LaunchOptions {
        settings: Settings::default(),
        seed: None,
        camera: CameraKind::default(),
    })
}

/// Martian DMV - Intergalactic License Renewal Simulator
#[derive(Parser, Debug)]
#[command(name = "martian-dmv-desktop")]
#[command(about = "Martian DMV - Intergalactic License Renewal Simulator")]
struct Args {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Settings file (default: <config dir>/martian-dmv/settings.json if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for every random decision, for reproducible sessions
    #[arg(short, long)]
    seed: Option<u64>,

    /// Camera backing the photo booth
    #[arg(long, value_enum, default_value_t = CameraKind::Synthetic)]
    camera: CameraKind,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = Settings::load(args.config.as_deref()).context("failed to load settings")?;

    tracing::info!(
        "Starting Martian DMV (seed: {:?}, camera: {:?})",
        args.seed,
        args.camera
    );

    let _ = LAUNCH.set(LaunchOptions {
        settings,
        seed: args.seed,
        camera: args.camera,
    });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Martian DMV")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
