//! Chart Plotter Module
//! Draws two line series on a shared x-axis using egui_plot, the second one
//! against a secondary y-axis on the right.

use crate::charts::{ChartData, SecondaryAxis};
use egui::Color32;
use egui_plot::{AxisHints, HPlacement, Legend, Line, Plot, PlotPoints};

pub const PRIMARY_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
pub const SECONDARY_COLOR: Color32 = Color32::from_rgb(243, 156, 18); // Orange

const LINE_WIDTH: f32 = 1.5;

/// Creates the metrics line chart.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Legend entry for the secondary series.
    pub fn secondary_legend_name(chart: &ChartData) -> String {
        format!("{} (right)", chart.secondary.name)
    }

    /// Secondary series mapped onto the primary scale.
    pub fn secondary_points(chart: &ChartData, axis: &SecondaryAxis) -> Vec<[f64; 2]> {
        chart
            .secondary
            .points(&chart.x)
            .into_iter()
            .map(|[x, y]| [x, axis.to_primary(y)])
            .collect()
    }

    /// Draw the chart filling the available space.
    pub fn draw_line_chart(ui: &mut egui::Ui, chart: &ChartData) {
        let axis = SecondaryAxis::fit(
            chart.primary.present_values(),
            chart.secondary.present_values(),
        );

        let primary_points = chart.primary.points(&chart.x);
        let secondary_points = Self::secondary_points(chart, &axis);

        let y_axes = vec![
            AxisHints::new_y().label(chart.primary.name.clone()),
            AxisHints::new_y()
                .label(chart.secondary.name.clone())
                .placement(HPlacement::Right)
                .formatter(move |mark, _range| format_tick(axis.from_primary(mark.value))),
        ];

        Plot::new(format!("metrics_{}", chart.title))
            .legend(Legend::default())
            .x_axis_label(chart.x_label.clone())
            .custom_y_axes(y_axes)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from(primary_points))
                        .color(PRIMARY_COLOR)
                        .width(LINE_WIDTH)
                        .name(&chart.primary.name),
                );
                plot_ui.line(
                    Line::new(PlotPoints::from(secondary_points))
                        .color(SECONDARY_COLOR)
                        .width(LINE_WIDTH)
                        .name(Self::secondary_legend_name(chart)),
                );
            });
    }
}

/// Short tick label: integers without decimals, others trimmed.
fn format_tick(value: f64) -> String {
    let formatted = format!("{:.3}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
