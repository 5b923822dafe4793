//! Data module - CSV loading and processing

pub(crate) mod loader;
pub(crate) mod processor;

pub use loader::MetricsLoader;
pub use processor::{ColumnSchema, DataProcessor};
