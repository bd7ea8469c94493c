//! Food catalog handling and per-meal suggestions.

pub mod catalog;
pub mod suggest;

pub use catalog::{CatalogError, FoodCatalog, FoodCategory, FoodItem};
pub use suggest::{MealSuggestions, Suggestion};
