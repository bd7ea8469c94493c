//! MacroPlan - Fat-Loss Calorie & Meal Planning Calculator
//!
//! Main entry point for the command-line planner.

use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use macroplan::foods::catalog::FoodCatalog;
use macroplan::plan::types::PlanWarning;
use macroplan::{config, MealPlan};

mod report;

fn main() -> anyhow::Result<()> {
    // Configure tracing subscriber
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting MacroPlan v{}", env!("CARGO_PKG_VERSION"));

    let request_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(config::get_request_path);
    let request = config::load_request(&request_path)
        .with_context(|| format!("Failed to load plan request from {}", request_path.display()))?;

    // An unusable catalog downgrades to the built-in default foods.
    let mut catalog_warning = None;
    let catalog = match &request.catalog {
        Some(path) => match FoodCatalog::load(path) {
            Ok(catalog) => {
                tracing::info!(items = catalog.len(), "Food catalog loaded");
                Some(catalog)
            }
            Err(err) => {
                tracing::warn!(%err, path = %path.display(), "Food catalog rejected, using default suggestions");
                catalog_warning = Some(PlanWarning::CatalogDiscarded {
                    reason: err.to_string(),
                });
                None
            }
        },
        None => None,
    };

    let mut plan = MealPlan::generate(
        &request.profile,
        &request.activity,
        request.timing,
        request.day,
        catalog.as_ref(),
        &mut rand::thread_rng(),
    );
    if let Some(warning) = catalog_warning {
        plan.warnings.push(warning);
    }

    report::print_report(&request, &plan);

    if let Some(path) = &request.export_csv {
        macroplan::export::export_csv_to_file(&plan, path)
            .with_context(|| format!("Failed to export CSV to {}", path.display()))?;
        tracing::info!(path = %path.display(), "Plan exported as CSV");
    }

    if let Some(path) = &request.export_json {
        let json = serde_json::to_string_pretty(&plan)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to export JSON to {}", path.display()))?;
        tracing::info!(path = %path.display(), "Plan exported as JSON");
    }

    Ok(())
}
