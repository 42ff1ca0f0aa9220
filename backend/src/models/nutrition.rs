use serde::{Deserialize, Serialize};

/// Aggregate nutrition record for a named diet category (e.g. "Keto").
///
/// Profiles are created when the store is seeded and never updated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionProfile {
    /// Diet category label, unique within a seed.
    #[serde(alias = "diet")]
    pub diet_name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionProfile {
    pub fn new(
        diet_name: impl Into<String>,
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
    ) -> Self {
        Self {
            diet_name: diet_name.into(),
            calories,
            protein,
            carbs,
            fat,
        }
    }
}

/// Numeric columns of a [`NutritionProfile`] that can be averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutrientField {
    Calories,
    Protein,
    Carbs,
    Fat,
}

impl NutrientField {
    /// Every field, in heatmap label order.
    pub const ALL: [NutrientField; 4] = [
        NutrientField::Calories,
        NutrientField::Protein,
        NutrientField::Carbs,
        NutrientField::Fat,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NutrientField::Calories => "Calories",
            NutrientField::Protein => "Protein",
            NutrientField::Carbs => "Carbs",
            NutrientField::Fat => "Fat",
        }
    }

    /// Read this field from a profile.
    pub fn value_of(&self, profile: &NutritionProfile) -> f64 {
        match self {
            NutrientField::Calories => profile.calories,
            NutrientField::Protein => profile.protein,
            NutrientField::Carbs => profile.carbs,
            NutrientField::Fat => profile.fat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_serializes_camel_case() {
        let profile = NutritionProfile::new("Keto", 530.0, 30.0, 10.0, 60.0);
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["dietName"], "Keto");
        assert_eq!(json["calories"], 530.0);
        assert!(json.get("diet_name").is_none());
    }

    #[test]
    fn test_profile_accepts_diet_alias() {
        let profile: NutritionProfile = serde_json::from_str(
            r#"{"diet":"Vegan","calories":420,"protein":20,"carbs":50,"fat":15}"#,
        )
        .unwrap();
        assert_eq!(profile.diet_name, "Vegan");
        assert_eq!(profile.fat, 15.0);
    }

    #[test]
    fn test_nutrient_field_value_of() {
        let profile = NutritionProfile::new("Paleo", 480.0, 25.0, 35.0, 30.0);
        let values: Vec<f64> = NutrientField::ALL
            .iter()
            .map(|f| f.value_of(&profile))
            .collect();
        assert_eq!(values, vec![480.0, 25.0, 35.0, 30.0]);
        assert_eq!(NutrientField::Carbs.label(), "Carbs");
    }
}
