//! CSV export of the per-meal plan, and a reader for the same format.
//!
//! One row per meal: `meal,carb_kcal,protein_kcal,carb_foods,protein_foods,
//! fat_notes`. Food lists are "; "-joined `name(Ng)` labels; fields
//! containing a delimiter or quote are double-quoted.

use std::io::Write;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::foods::catalog::split_csv_line;
use crate::foods::suggest::{MealSuggestions, Suggestion};
use crate::plan::MealPlan;

/// One exported row.
#[derive(Debug, Clone, PartialEq)]
pub struct MealRow {
    /// Meal display name
    pub meal: String,
    /// Carbohydrate budget in kcal
    pub carb_kcal: f64,
    /// Protein budget in kcal
    pub protein_kcal: f64,
    /// "; "-joined carb food labels
    pub carb_foods: String,
    /// "; "-joined protein food labels
    pub protein_foods: String,
    /// Day-level fat note
    pub fat_notes: String,
}

fn food_list(suggestions: &[Suggestion]) -> String {
    suggestions
        .iter()
        .map(|s| s.label())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Quote a field when it contains a delimiter, quote or newline.
fn quote_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_row(output: &mut Vec<u8>, sugg: &MealSuggestions) -> Result<(), ExportError> {
    writeln!(
        output,
        "{},{:.1},{:.1},{},{},{}",
        sugg.meal.display_name(),
        sugg.carb_kcal,
        sugg.protein_kcal,
        quote_field(&food_list(&sugg.carbs)),
        quote_field(&food_list(&sugg.proteins)),
        quote_field(&sugg.fat_note),
    )
    .map_err(|e| ExportError::WriteFailed(e.to_string()))
}

/// Export the per-meal plan to CSV.
pub fn export_plan_csv(plan: &MealPlan) -> Result<String, ExportError> {
    if plan.suggestions.is_empty() {
        return Err(ExportError::NoData);
    }

    let mut output = Vec::new();

    // Write header
    writeln!(
        output,
        "meal,carb_kcal,protein_kcal,carb_foods,protein_foods,fat_notes"
    )
    .map_err(|e| ExportError::WriteFailed(e.to_string()))?;

    // Write one row per meal
    for sugg in &plan.suggestions {
        write_row(&mut output, sugg)?;
    }

    String::from_utf8(output).map_err(|e| ExportError::WriteFailed(e.to_string()))
}

/// Read a plan CSV produced by [`export_plan_csv`].
///
/// Numeric fields come back exactly as exported; food lists stay joined
/// strings.
pub fn parse_plan_csv(content: &str) -> Result<Vec<MealRow>, ExportError> {
    let mut lines = content.lines().filter(|line| !line.trim().is_empty());
    let header = lines.next().ok_or(ExportError::NoData)?;
    if !header.starts_with("meal,") {
        return Err(ExportError::MalformedRow(header.to_string()));
    }

    let mut rows = Vec::new();
    for line in lines {
        let fields = split_csv_line(line);
        if fields.len() != 6 {
            return Err(ExportError::MalformedRow(line.to_string()));
        }

        let number = |field: &str| {
            field
                .trim()
                .parse::<f64>()
                .map_err(|_| ExportError::MalformedRow(line.to_string()))
        };

        rows.push(MealRow {
            meal: fields[0].clone(),
            carb_kcal: number(&fields[1])?,
            protein_kcal: number(&fields[2])?,
            carb_foods: fields[3].clone(),
            protein_foods: fields[4].clone(),
            fat_notes: fields[5].clone(),
        });
    }

    if rows.is_empty() {
        return Err(ExportError::NoData);
    }
    Ok(rows)
}

/// Export a plan to CSV and write it to a file.
pub fn export_csv_to_file(plan: &MealPlan, path: &std::path::Path) -> Result<(), ExportError> {
    let content = export_plan_csv(plan)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Generate a default filename for a plan CSV export.
pub fn generate_csv_filename(generated_at: DateTime<Utc>) -> String {
    let timestamp = generated_at.format("%Y%m%d_%H%M%S");
    format!("MacroPlan_{}.csv", timestamp)
}

/// Errors during plan export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Plan has no suggestion rows
    #[error("Plan has no data to export")]
    NoData,

    /// Failed to write export data
    #[error("Failed to write data: {0}")]
    WriteFailed(String),

    /// A row does not match the plan CSV format
    #[error("Malformed row: {0}")]
    MalformedRow(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
