use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{nutrition_profiles, recipes};
use crate::models::{NutritionProfile, Recipe, RecipeId};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = nutrition_profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)] // row_id and created_at are only used for ordering and auditing
pub struct NutritionProfileRow {
    pub row_id: i64,
    pub diet_name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub created_at: DateTime<Utc>,
}

impl From<NutritionProfileRow> for NutritionProfile {
    fn from(row: NutritionProfileRow) -> Self {
        NutritionProfile {
            diet_name: row.diet_name,
            calories: row.calories,
            protein: row.protein,
            carbs: row.carbs,
            fat: row.fat,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = nutrition_profiles)]
pub struct NewNutritionProfileRow {
    pub diet_name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl From<&NutritionProfile> for NewNutritionProfileRow {
    fn from(profile: &NutritionProfile) -> Self {
        Self {
            diet_name: profile.diet_name.clone(),
            calories: profile.calories,
            protein: profile.protein,
            carbs: profile.carbs,
            fat: profile.fat,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)] // row_id and created_at are only used for ordering and auditing
pub struct RecipeRow {
    pub row_id: i64,
    pub recipe_id: i64,
    pub name: String,
    pub diet_type: String,
    pub calories: f64,
    pub protein: f64,
    pub created_at: DateTime<Utc>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Recipe {
            id: RecipeId(row.recipe_id),
            name: row.name,
            diet_type: row.diet_type,
            calories: row.calories,
            protein: row.protein,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = recipes)]
pub struct NewRecipeRow {
    pub recipe_id: i64,
    pub name: String,
    pub diet_type: String,
    pub calories: f64,
    pub protein: f64,
}

impl From<&Recipe> for NewRecipeRow {
    fn from(recipe: &Recipe) -> Self {
        Self {
            recipe_id: recipe.id.value(),
            name: recipe.name.clone(),
            diet_type: recipe.diet_type.clone(),
            calories: recipe.calories,
            protein: recipe.protein,
        }
    }
}
