use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable recipe identifier.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RecipeId(pub i64);

impl RecipeId {
    pub fn new(value: i64) -> Self {
        RecipeId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named dish tagged with a diet-type category and nutrition facts.
///
/// `diet_type` is a lowercase tag; it does not have to match any
/// [`NutritionProfile::diet_name`](super::NutritionProfile).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub diet_type: String,
    pub calories: f64,
    pub protein: f64,
}

impl Recipe {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        diet_type: impl Into<String>,
        calories: f64,
        protein: f64,
    ) -> Self {
        Self {
            id: RecipeId::new(id),
            name: name.into(),
            diet_type: diet_type.into(),
            calories,
            protein,
        }
    }
}
