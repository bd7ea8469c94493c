//! Plan export formats.

pub mod csv;

pub use csv::{export_csv_to_file, export_plan_csv, parse_plan_csv, ExportError, MealRow};
