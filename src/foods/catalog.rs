//! Food catalog loading and category inference.
//!
//! Catalogs are plain CSV files with a header row. `food` and `cal_per_100g`
//! are required (header match is case-insensitive); `category`,
//! `protein_g_per_100g`, `carbs_g_per_100g`, `fat_g_per_100g` and `tags`
//! are optional. When the category column is absent, categories are
//! inferred from the free-text tags.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Food macro category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Carb,
    Protein,
    Fat,
    Veg,
    Fruit,
    Other,
}

/// Tag keywords marking a protein source.
const PROTEIN_KEYWORDS: [&str; 4] = ["protein", "meat", "fish", "egg"];
/// Tag keywords marking a carbohydrate source.
const CARB_KEYWORDS: [&str; 7] = ["grain", "carb", "rice", "oat", "bread", "potato", "sweet"];
/// Tag keywords marking a vegetable.
const VEG_KEYWORDS: [&str; 4] = ["vegetable", "veg", "broccoli", "spinach"];
/// Tag keywords marking a fruit.
const FRUIT_KEYWORDS: [&str; 3] = ["fruit", "banana", "apple"];
/// Tag keywords marking a fat source.
const FAT_KEYWORDS: [&str; 5] = ["fat", "oil", "olive", "almond", "nut"];

impl FoodCategory {
    /// Parse a category cell. Unknown labels map to `Other`.
    pub fn parse(cell: &str) -> Self {
        match cell.trim().to_lowercase().as_str() {
            "carb" => FoodCategory::Carb,
            "protein" => FoodCategory::Protein,
            "fat" => FoodCategory::Fat,
            "veg" => FoodCategory::Veg,
            "fruit" => FoodCategory::Fruit,
            _ => FoodCategory::Other,
        }
    }

    /// Infer a category from free-text tags by keyword match.
    ///
    /// The keyword lists and their precedence (protein, carb, veg, fruit,
    /// fat) are a fixed rule table; a tag matching several lists takes the
    /// first hit.
    pub fn infer_from_tags(tags: &str) -> Self {
        let tags = tags.to_lowercase();
        let matches = |keywords: &[&str]| keywords.iter().any(|k| tags.contains(k));

        if matches(&PROTEIN_KEYWORDS) {
            FoodCategory::Protein
        } else if matches(&CARB_KEYWORDS) {
            FoodCategory::Carb
        } else if matches(&VEG_KEYWORDS) {
            FoodCategory::Veg
        } else if matches(&FRUIT_KEYWORDS) {
            FoodCategory::Fruit
        } else if matches(&FAT_KEYWORDS) {
            FoodCategory::Fat
        } else {
            FoodCategory::Other
        }
    }

    /// Lowercase label, also used for the tag-substring fallback search.
    pub fn label(&self) -> &'static str {
        match self {
            FoodCategory::Carb => "carb",
            FoodCategory::Protein => "protein",
            FoodCategory::Fat => "fat",
            FoodCategory::Veg => "veg",
            FoodCategory::Fruit => "fruit",
            FoodCategory::Other => "other",
        }
    }
}

impl std::fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    /// Food name
    pub food: String,
    /// Macro category, from the catalog column or inferred from tags
    pub category: FoodCategory,
    /// Energy density in kcal per 100 g
    pub cal_per_100g: f64,
    /// Protein per 100 g
    pub protein_g_per_100g: Option<f64>,
    /// Carbohydrates per 100 g
    pub carbs_g_per_100g: Option<f64>,
    /// Fat per 100 g
    pub fat_g_per_100g: Option<f64>,
    /// Free-text tags from the catalog
    pub tags: Option<String>,
}

/// An in-memory food catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodCatalog {
    /// All catalog entries
    pub items: Vec<FoodItem>,
}

impl FoodCatalog {
    /// Parse a catalog from CSV text.
    ///
    /// Rows with an empty food name are skipped; a missing or unparsable
    /// `cal_per_100g` cell falls back to 100 rather than failing the whole
    /// catalog.
    pub fn parse_csv(content: &str) -> Result<Self, CatalogError> {
        let mut lines = content.lines().filter(|line| !line.trim().is_empty());
        let header = lines.next().ok_or(CatalogError::Empty)?;
        let columns: Vec<String> = split_csv_line(header)
            .iter()
            .map(|c| c.trim().to_lowercase())
            .collect();

        let column = |name: &str| columns.iter().position(|c| c == name);
        let food_col = column("food").ok_or(CatalogError::MissingColumns)?;
        let cal_col = column("cal_per_100g").ok_or(CatalogError::MissingColumns)?;
        let category_col = column("category");
        let tags_col = column("tags");
        let protein_col = column("protein_g_per_100g");
        let carbs_col = column("carbs_g_per_100g");
        let fat_col = column("fat_g_per_100g");

        let mut items = Vec::new();
        for line in lines {
            let fields = split_csv_line(line);
            let parse_number = |col: Option<usize>| {
                col.and_then(|i| fields.get(i))
                    .and_then(|f| f.trim().parse::<f64>().ok())
            };

            let Some(food) = fields.get(food_col).map(|f| f.trim()) else {
                continue;
            };
            if food.is_empty() {
                continue;
            }

            let cal_per_100g = parse_number(Some(cal_col)).unwrap_or(100.0);
            let tags = tags_col
                .and_then(|i| fields.get(i))
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty());

            let category = if let Some(i) = category_col {
                FoodCategory::parse(fields.get(i).map(String::as_str).unwrap_or(""))
            } else if let Some(tags) = &tags {
                FoodCategory::infer_from_tags(tags)
            } else {
                FoodCategory::Other
            };

            items.push(FoodItem {
                food: food.to_string(),
                category,
                cal_per_100g,
                protein_g_per_100g: parse_number(protein_col),
                carbs_g_per_100g: parse_number(carbs_col),
                fat_g_per_100g: parse_number(fat_col),
                tags,
            });
        }

        if items.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { items })
    }

    /// Load a catalog from a CSV file on disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_csv(&content)
    }

    /// Items in a category.
    ///
    /// When no item carries the category directly, falls back to a substring
    /// search of the free-text tags for the category label.
    pub fn items_in_category(&self, category: FoodCategory) -> Vec<&FoodItem> {
        let direct: Vec<&FoodItem> = self
            .items
            .iter()
            .filter(|item| item.category == category)
            .collect();
        if !direct.is_empty() {
            return direct;
        }

        self.items
            .iter()
            .filter(|item| {
                item.tags
                    .as_deref()
                    .is_some_and(|tags| tags.to_lowercase().contains(category.label()))
            })
            .collect()
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Split one CSV line into fields, honoring double-quoted fields.
pub(crate) fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Catalog errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Required columns `food` and `cal_per_100g` are missing
    #[error("Catalog is missing required columns (food, cal_per_100g)")]
    MissingColumns,

    /// The file parsed but contained no usable rows
    #[error("Catalog contains no food rows")]
    Empty,

    /// The file could not be read
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
