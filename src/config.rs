use crate::data::ColumnSchema;
use clap::Parser;
use std::path::PathBuf;

/// File loaded when no path is given.
pub const DEFAULT_DATA_FILE: &str = "data.csv";

/// Plot recorded training metrics from a CSV file
#[derive(Parser, Debug, Clone)]
#[command(
    name = "metrics_chart",
    about = "Plot recorded training metrics from a CSV file",
    version
)]
pub struct Settings {
    /// CSV file whose first row names the columns
    #[arg(default_value = DEFAULT_DATA_FILE)]
    pub path: PathBuf,

    /// How the plotted columns are picked out of the table
    #[arg(long, value_enum, default_value_t = ColumnSchema::ByName)]
    pub schema: ColumnSchema,

    /// Logging filter (e.g. "info", "debug", "metrics_chart=trace")
    #[arg(long, default_value = "info", env = "METRICS_CHART_LOG")]
    pub log_level: String,
}

impl Settings {
    /// Title shown above the chart: the file name, or the full path if it has none.
    pub fn chart_title(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::try_parse_from(["metrics_chart"]).unwrap();

        assert_eq!(settings.path, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(settings.schema, ColumnSchema::ByName);
        assert_eq!(settings.chart_title(), "data.csv");
    }

    #[test]
    fn test_positional_path_and_schema() {
        let settings = Settings::try_parse_from([
            "metrics_chart",
            "runs/a2c/metrics.csv",
            "--schema",
            "by-position",
        ])
        .unwrap();

        assert_eq!(settings.path, PathBuf::from("runs/a2c/metrics.csv"));
        assert_eq!(settings.schema, ColumnSchema::ByPosition);
        assert_eq!(settings.chart_title(), "metrics.csv");
    }

    #[test]
    fn test_unknown_schema_is_rejected() {
        assert!(Settings::try_parse_from(["metrics_chart", "--schema", "sideways"]).is_err());
    }
}
