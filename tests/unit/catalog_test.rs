//! Unit tests for food catalog loading and category inference.

use macroplan::foods::catalog::{CatalogError, FoodCatalog, FoodCategory};

#[test]
fn test_load_catalog_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("foods.csv");
    std::fs::write(
        &path,
        "food,category,cal_per_100g,protein_g_per_100g\n\
         Chicken breast,protein,165,31\n\
         Cooked white rice,carb,130,\n",
    )
    .unwrap();

    let catalog = FoodCatalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.items[0].protein_g_per_100g, Some(31.0));
    assert_eq!(catalog.items[1].protein_g_per_100g, None);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = FoodCatalog::load(&dir.path().join("nope.csv"));
    assert!(matches!(result, Err(CatalogError::IoError(_))));
}

#[test]
fn test_catalog_without_required_columns_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(&path, "name,calories\nrice,130\n").unwrap();

    let result = FoodCatalog::load(&path);
    assert!(matches!(result, Err(CatalogError::MissingColumns)));
}

#[test]
fn test_inference_used_only_without_category_column() {
    // With a category column present, tags are not consulted
    let catalog = FoodCatalog::parse_csv(
        "food,category,cal_per_100g,tags\n\
         salmon,other,208,fish\n",
    )
    .unwrap();
    assert_eq!(catalog.items[0].category, FoodCategory::Other);

    // Without one, the fish tag wins
    let catalog = FoodCatalog::parse_csv(
        "food,cal_per_100g,tags\n\
         salmon,208,fish\n",
    )
    .unwrap();
    assert_eq!(catalog.items[0].category, FoodCategory::Protein);
}

#[test]
fn test_no_category_and_no_tags_is_other() {
    let catalog = FoodCatalog::parse_csv("food,cal_per_100g\nmystery,250\n").unwrap();
    assert_eq!(catalog.items[0].category, FoodCategory::Other);
}

#[test]
fn test_keyword_lists_cover_all_categories() {
    let cases = [
        ("lean meat", FoodCategory::Protein),
        ("whole grain", FoodCategory::Carb),
        ("potato dish", FoodCategory::Carb),
        ("leafy vegetable", FoodCategory::Veg),
        ("banana bunch", FoodCategory::Fruit),
        ("olive spread", FoodCategory::Fat),
        ("soda", FoodCategory::Other),
    ];

    for (tags, expected) in cases {
        assert_eq!(
            FoodCategory::infer_from_tags(tags),
            expected,
            "tags {tags:?}"
        );
    }
}

#[test]
fn test_category_lookup_falls_back_to_tags() {
    let catalog = FoodCatalog::parse_csv(
        "food,category,cal_per_100g,tags\n\
         yogurt,other,59,high protein snack\n\
         rice,other,130,\n",
    )
    .unwrap();

    let proteins = catalog.items_in_category(FoodCategory::Protein);
    assert_eq!(proteins.len(), 1);
    assert_eq!(proteins[0].food, "yogurt");

    // No carb item and no carb tag anywhere
    assert!(catalog.items_in_category(FoodCategory::Carb).is_empty());
}

#[test]
fn test_blank_lines_and_unnamed_rows_skipped() {
    let catalog = FoodCatalog::parse_csv(
        "food,cal_per_100g\n\
         \n\
         rice,130\n\
         ,999\n",
    )
    .unwrap();
    assert_eq!(catalog.len(), 1);
}
