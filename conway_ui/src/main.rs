// main.rs - Desktop frontend for the Game of Life seed editor and simulation

use std::path::PathBuf;

use anyhow::{Context, anyhow};
use conway::{Config, Session, Viewport};
use eframe::egui;
use log::info;

mod ui; // eframe::App impl and the egui Display

const CONFIG_ENV: &str = "CONWAY_CONFIG";

pub struct GameOfLife {
    pub session: Session,
    pub config: Config,
}

impl GameOfLife {
    pub fn new(config: Config) -> Self {
        // Real size arrives with the first frame
        Self { session: Session::new(Viewport::new(0, 0)), config }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let config = Config::load_or_default(config_path.as_deref()).context("failed to load configuration")?;
    info!("starting with {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(GameOfLife::new(config))),
    )
    .map_err(|err| anyhow!("eframe failed: {err}"))
}
