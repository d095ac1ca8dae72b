//! Reference table tools

use serde::Serialize;

use crate::reference::{ReferenceRow, ReferenceTable};

/// Response for list_ingredients
#[derive(Debug, Serialize)]
pub struct ListIngredientsResponse {
    pub ingredients: Vec<String>,
    pub total: usize,
}

/// Full reference row with a usability verdict
#[derive(Debug, Serialize)]
pub struct IngredientDetail {
    #[serde(flatten)]
    pub row: ReferenceRow,
    pub usable: bool,
    pub invalid_fields: Vec<&'static str>,
}

/// Sorted unique ingredient names, optionally filtered by a
/// case-insensitive substring
pub fn list_ingredients(reference: &ReferenceTable, query: Option<&str>) -> ListIngredientsResponse {
    let needle = query.map(|q| q.trim().to_lowercase()).filter(|q| !q.is_empty());

    let ingredients: Vec<String> = reference
        .ingredients()
        .filter(|name| match &needle {
            Some(n) => name.to_lowercase().contains(n.as_str()),
            None => true,
        })
        .map(str::to_string)
        .collect();

    ListIngredientsResponse { total: ingredients.len(), ingredients }
}

/// Look up one ingredient
pub fn get_ingredient(reference: &ReferenceTable, name: &str) -> Option<IngredientDetail> {
    reference.get(name.trim()).map(|row| {
        IngredientDetail {
            row: row.clone(),
            usable: row.is_usable(),
            invalid_fields: row.invalid_fields(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> ReferenceTable {
        let mut broken = ReferenceRow::new("Brown Rice", 0.026, 0.23, 0.009, 112.0, 100.0);
        broken.calories = None;
        ReferenceTable::from_rows(vec![
            ReferenceRow::new("White Rice", 0.027, 0.28, 0.003, 130.0, 100.0),
            ReferenceRow::new("Oats", 0.13, 0.66, 0.07, 389.0, 100.0),
            ReferenceRow::new("Zero Portion", 0.1, 0.1, 0.1, 10.0, 0.0),
            broken,
        ])
    }

    #[test]
    fn test_list_all_sorted() {
        let listing = list_ingredients(&reference(), None);
        assert_eq!(listing.total, 4);
        assert_eq!(listing.ingredients[0], "Brown Rice");
        assert_eq!(listing.ingredients[3], "Zero Portion");
    }

    #[test]
    fn test_list_filtered() {
        let listing = list_ingredients(&reference(), Some("RICE"));
        assert_eq!(listing.ingredients, vec!["Brown Rice", "White Rice"]);
    }

    #[test]
    fn test_get_ingredient_usability() {
        let table = reference();
        assert!(get_ingredient(&table, "Oats").unwrap().usable);

        let brown = get_ingredient(&table, "Brown Rice").unwrap();
        assert!(!brown.usable);
        assert_eq!(brown.invalid_fields, vec!["Calories"]);

        assert!(!get_ingredient(&table, "Zero Portion").unwrap().usable);
        assert!(get_ingredient(&table, "Quinoa").is_none());
    }
}
