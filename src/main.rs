#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod dnd;
mod library;
mod pages;
mod resolver;
mod theme;
mod types;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global images directory, set from command line
static IMAGES_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the images directory (set from command line or platform default)
pub fn get_images_dir() -> PathBuf {
    IMAGES_DIR.get().cloned().unwrap_or_else(|| {
        dirs::picture_dir().unwrap_or_else(|| PathBuf::from("."))
    })
}

/// Dropdeck - drag-and-drop image reference board
#[derive(Parser, Debug)]
#[command(name = "dropdeck-desktop")]
#[command(about = "Dropdeck - drag-and-drop image reference board")]
struct Args {
    /// Directory scanned for images on startup
    #[arg(short, long)]
    images_dir: Option<PathBuf>,

    /// Window title override
    #[arg(short, long)]
    title: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let images_dir = args.images_dir.unwrap_or_else(|| {
        dirs::picture_dir().unwrap_or_else(|| PathBuf::from("."))
    });
    let _ = IMAGES_DIR.set(images_dir.clone());

    let title = args.title.unwrap_or_else(|| "Dropdeck".to_string());

    tracing::info!("Starting '{}' with images dir: {:?}", title, images_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1000.0, 760.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
