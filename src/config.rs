//! User profile and plan request configuration.
//!
//! A plan request is a TOML document naming the profile, activity inputs,
//! training timing, the day to plan for and optional catalog/export paths:
//!
//! ```toml
//! timing = "before-dinner"
//! day = "training"
//! catalog = "foods.csv"
//!
//! [profile]
//! sex = "female"
//! age = 28
//! height_cm = 165.0
//! weight_kg = 60.0
//!
//! [activity]
//! strength = "intermediate"
//! cardio_kcal_per_day = 150.0
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::energy::targets::DayKind;
use crate::plan::types::{ActivityInputs, Sex, TrainingTiming};

/// User profile with anthropometric data.
///
/// Immutable once a calculation starts; derived figures are recomputed from
/// scratch for every plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Display name
    pub name: Option<String>,
    /// Biological sex
    pub sex: Sex,
    /// Age in years (13-100)
    pub age: u32,
    /// Height in centimeters (120-220)
    pub height_cm: f64,
    /// Weight in kilograms (30-200)
    pub weight_kg: f64,
    /// Manually entered BMI overriding the computed value
    pub bmi_override: Option<f64>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: None,
            sex: Sex::Female,
            age: 28,
            height_cm: 165.0,
            weight_kg: 60.0,
            bmi_override: None,
        }
    }
}

impl UserProfile {
    /// Body mass index, computed from height and weight unless overridden.
    /// Computed values are rounded to one decimal.
    pub fn bmi(&self) -> f64 {
        if let Some(bmi) = self.bmi_override {
            return bmi;
        }
        let height_m = self.height_cm / 100.0;
        let bmi = self.weight_kg / (height_m * height_m);
        (bmi * 10.0).round() / 10.0
    }

    /// Validate age (13-100 years).
    pub fn validate_age(age: u32) -> bool {
        (13..=100).contains(&age)
    }

    /// Validate height (120-220 cm).
    pub fn validate_height(height_cm: f64) -> bool {
        (120.0..=220.0).contains(&height_cm)
    }

    /// Validate weight (30-200 kg).
    pub fn validate_weight(weight_kg: f64) -> bool {
        (30.0..=200.0).contains(&weight_kg)
    }

    /// Check all profile fields against the accepted input ranges.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !Self::validate_age(self.age) {
            return Err("Age must be between 13 and 100 years");
        }
        if !Self::validate_height(self.height_cm) {
            return Err("Height must be between 120 and 220 cm");
        }
        if !Self::validate_weight(self.weight_kg) {
            return Err("Weight must be between 30 and 200 kg");
        }
        Ok(())
    }
}

/// A complete plan request as read from the TOML request file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanRequest {
    /// Training timing, drives post-workout meal resolution
    pub timing: TrainingTiming,
    /// Which day's plan to generate
    pub day: DayKind,
    /// Optional food catalog CSV path
    pub catalog: Option<PathBuf>,
    /// Optional CSV export destination
    pub export_csv: Option<PathBuf>,
    /// Optional JSON dump destination
    pub export_json: Option<PathBuf>,
    /// User profile
    pub profile: UserProfile,
    /// Activity inputs
    pub activity: ActivityInputs,
}

impl PlanRequest {
    /// Validate every range-constrained field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.profile
            .validate()
            .map_err(|msg| ConfigError::InvalidValue(msg.to_string()))?;
        if self.activity.cardio_kcal_per_day < 0.0 {
            return Err(ConfigError::InvalidValue(
                "Cardio kcal/day cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Get the platform configuration directory.
pub fn get_config_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "macroplan", "MacroPlan")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Default plan request file path.
pub fn get_request_path() -> PathBuf {
    get_config_dir().join("macroplan.toml")
}

/// Load a plan request, falling back to defaults when the file is absent.
pub fn load_request(path: &Path) -> Result<PlanRequest, ConfigError> {
    if !path.exists() {
        return Ok(PlanRequest::default());
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let request: PlanRequest =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    request.validate()?;

    Ok(request)
}

/// Save a plan request to file (handy for writing a starter request).
pub fn save_request(request: &PlanRequest, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(request).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Invalid request: {0}")]
    InvalidValue(String),
}
