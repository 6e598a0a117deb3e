#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Directory holding the card artwork, set from command line
static ASSETS_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Optional catalog override, set from command line
static CATALOG_PATH: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Optional passcode override, set from command line
static PASSCODE: OnceLock<Option<String>> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cardfold")
    })
}

/// Get the artwork directory (set from command line or default)
pub fn get_assets_dir() -> PathBuf {
    ASSETS_DIR
        .get()
        .cloned()
        .unwrap_or_else(|| PathBuf::from("assets"))
}

/// Get the catalog override path, if one was given
pub fn get_catalog_path() -> Option<PathBuf> {
    CATALOG_PATH.get().cloned().flatten()
}

/// Get the passcode override, if one was given
pub fn get_passcode() -> Option<String> {
    PASSCODE.get().cloned().flatten()
}

/// Cardfold - A gated gallery of greeting cards
#[derive(Parser, Debug)]
#[command(name = "cardfold-desktop")]
#[command(about = "Cardfold - password-gated greeting card carousel")]
struct Args {
    /// Data directory for session storage
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Directory containing the card artwork
    #[arg(short, long)]
    assets_dir: Option<PathBuf>,

    /// Card catalog JSON file (defaults to the built-in collection)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Gallery passcode (defaults to the built-in one)
    #[arg(short, long)]
    passcode: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cardfold")
    });

    let _ = DATA_DIR.set(data_dir.clone());
    let _ = ASSETS_DIR.set(args.assets_dir.unwrap_or_else(|| PathBuf::from("assets")));
    let _ = CATALOG_PATH.set(args.catalog);
    let _ = PASSCODE.set(args.passcode);

    tracing::info!("Starting Cardfold with data dir: {:?}", data_dir);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Cardfold")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
