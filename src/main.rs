//! Metrics Chart - Training Metrics CSV Loader & Interactive Line Chart
//!
//! Loads a CSV of recorded training metrics and shows two of its columns as
//! line series sharing an x-axis, the second against a secondary y-axis.

mod charts;
mod config;
mod data;
mod gui;
mod logging;
mod pipeline;

use clap::Parser;
use config::Settings;
use gui::WindowPresenter;

fn main() -> anyhow::Result<()> {
    let settings = Settings::parse();
    logging::setup_logging(&settings.log_level)?;

    tracing::debug!("Metrics Chart v{} starting", env!("CARGO_PKG_VERSION"));

    pipeline::run(&settings, &mut WindowPresenter)
}
