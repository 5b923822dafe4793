//! Charts module - Chart model and rendering

mod axis;
mod plotter;

pub use axis::SecondaryAxis;
pub use plotter::ChartPlotter;

/// One named line of y values, aligned with the chart's x values.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl LineSeries {
    /// Points with a value, paired with their x coordinate.
    /// Rows missing either coordinate are skipped.
    pub fn points(&self, x: &[Option<f64>]) -> Vec<[f64; 2]> {
        x.iter()
            .zip(&self.values)
            .filter_map(|(&x, &y)| match (x, y) {
                (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some([x, y]),
                _ => None,
            })
            .collect()
    }

    /// Present values only.
    pub fn present_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().flatten().copied().filter(|v| v.is_finite())
    }
}

/// Everything the renderer needs for one chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub title: String,
    pub x_label: String,
    pub x: Vec<Option<f64>>,
    pub primary: LineSeries,
    pub secondary: LineSeries,
}
