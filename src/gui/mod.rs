//! GUI module - Presentation of a prepared chart

mod app;

pub use app::WindowPresenter;

use crate::charts::ChartData;

/// Shows a prepared chart to the user.
pub trait Presenter {
    fn present(&mut self, chart: ChartData) -> anyhow::Result<()>;
}
