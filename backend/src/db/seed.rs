//! Fixed demo dataset.
//!
//! Used to pre-populate the in-memory store and by the `seed-demo-data`
//! binary to reset a persistent store.

use crate::models::{NutritionProfile, Recipe};

/// The five demo diet profiles, in seed order.
pub fn demo_nutrition_profiles() -> Vec<NutritionProfile> {
    vec![
        NutritionProfile::new("Vegan", 420.0, 20.0, 50.0, 15.0),
        NutritionProfile::new("Keto", 530.0, 30.0, 10.0, 60.0),
        NutritionProfile::new("Paleo", 480.0, 25.0, 35.0, 30.0),
        NutritionProfile::new("Vegetarian", 410.0, 22.0, 45.0, 20.0),
        NutritionProfile::new("Mediterranean", 460.0, 24.0, 40.0, 28.0),
    ]
}

/// The eight demo recipes, in seed order.
pub fn demo_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(1, "Vegan Bowl", "vegan", 420.0, 18.0),
        Recipe::new(2, "Keto Chicken", "keto", 530.0, 42.0),
        Recipe::new(3, "Paleo Salad", "paleo", 390.0, 28.0),
        Recipe::new(4, "Veggie Wrap", "vegetarian", 410.0, 20.0),
        Recipe::new(5, "Mediterranean Tuna", "mediterranean", 480.0, 35.0),
        Recipe::new(6, "Vegan Lentil Soup", "vegan", 360.0, 16.0),
        Recipe::new(7, "Keto Omelette", "keto", 510.0, 33.0),
        Recipe::new(8, "Paleo Steak Plate", "paleo", 610.0, 48.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_diet_names_are_unique_and_non_empty() {
        let profiles = demo_nutrition_profiles();
        let names: HashSet<&str> = profiles.iter().map(|p| p.diet_name.as_str()).collect();
        assert_eq!(names.len(), profiles.len());
        assert!(names.iter().all(|n| !n.is_empty()));
    }

    #[test]
    fn test_recipe_ids_are_unique() {
        let recipes = demo_recipes();
        let ids: HashSet<i64> = recipes.iter().map(|r| r.id.value()).collect();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn test_diet_tags_are_lowercase() {
        for recipe in demo_recipes() {
            assert_eq!(recipe.diet_type, recipe.diet_type.to_lowercase());
        }
    }

    #[test]
    fn test_values_are_non_negative() {
        for p in demo_nutrition_profiles() {
            assert!(p.calories >= 0.0 && p.protein >= 0.0 && p.carbs >= 0.0 && p.fat >= 0.0);
        }
        for r in demo_recipes() {
            assert!(r.calories >= 0.0 && r.protein >= 0.0);
        }
    }
}
