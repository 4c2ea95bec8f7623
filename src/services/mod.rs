pub mod exporter;
pub mod prompt;

pub use exporter::{ExportReport, Exporter, LegendRecord};
pub use prompt::InputCollector;
