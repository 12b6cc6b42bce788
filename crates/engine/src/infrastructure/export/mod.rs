//! Session exporters.

mod csv_exporter;

pub use csv_exporter::{CsvExporter, CSV_HEADER};
