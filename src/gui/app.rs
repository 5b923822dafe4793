//! Metrics Chart Main Application
//! Single window showing the prepared line chart.

use crate::charts::{ChartData, ChartPlotter};
use crate::gui::Presenter;
use egui::RichText;

const APP_NAME: &str = "Metrics Chart";

/// Main application window.
pub struct MetricsChartApp {
    chart: ChartData,
}

impl MetricsChartApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, chart: ChartData) -> Self {
        Self { chart }
    }
}

impl eframe::App for MetricsChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(RichText::new(&self.chart.title).size(16.0).strong());
            ui.add_space(5.0);
            ChartPlotter::draw_line_chart(ui, &self.chart);
        });
    }
}

/// Opens a native window and blocks until the user closes it.
#[derive(Default)]
pub struct WindowPresenter;

impl Presenter for WindowPresenter {
    fn present(&mut self, chart: ChartData) -> anyhow::Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1000.0, 650.0])
                .with_min_inner_size([480.0, 320.0])
                .with_title(format!("{} - {}", APP_NAME, chart.title)),
            ..Default::default()
        };

        tracing::info!("Opening chart window for {}", chart.title);

        eframe::run_native(
            APP_NAME,
            options,
            Box::new(move |cc| Ok(Box::new(MetricsChartApp::new(cc, chart)))),
        )
        .map_err(|e| anyhow::anyhow!("Chart window failed: {e}"))?;

        tracing::debug!("Chart window closed");
        Ok(())
    }
}
