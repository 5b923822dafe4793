//! Load, derive, select and present, once per run.

use crate::config::Settings;
use crate::data::{DataProcessor, MetricsLoader};
use crate::gui::Presenter;

/// Run the whole pipeline for `settings`, handing the chart to `presenter`.
pub fn run(settings: &Settings, presenter: &mut dyn Presenter) -> anyhow::Result<()> {
    tracing::info!(
        "Loading {} with schema {:?}",
        settings.path.display(),
        settings.schema
    );

    let mut df = MetricsLoader::load(&settings.path)?;

    if settings.schema.needs_cumulative_reward() {
        DataProcessor::derive_cumulative_reward(&mut df)?;
    }

    let chart = DataProcessor::select_series(&df, settings.schema, &settings.chart_title())?;
    presenter.present(chart)
}
