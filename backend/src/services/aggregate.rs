//! Aggregator: summary statistics and chart shaping over nutrition profiles.
//!
//! All functions are pure structural transforms of their input slice; nothing
//! is cached and the input is never modified.

use crate::models::{NutrientField, NutritionProfile};
use crate::routes::insights::{
    BarData, BarDataset, ChartBundle, Heatmap, PieData, PieDataset, ScatterData, ScatterDataset,
    ScatterPoint, SummaryStats,
};

/// Label of the single scatter series.
pub const SCATTER_LABEL: &str = "Protein vs Carbs";

/// Fixed presentation matrix shown in the heatmap widget.
///
/// This is a placeholder, not a statistic computed from the profiles it is
/// displayed next to. Rows and columns follow [`NutrientField::ALL`].
pub const CORRELATION_MATRIX: [[f64; 4]; 4] = [
    [1.0, 0.4, 0.6, 0.7],
    [0.4, 1.0, 0.2, 0.3],
    [0.6, 0.2, 1.0, 0.5],
    [0.7, 0.3, 0.5, 1.0],
];

/// Round to one decimal place (half away from zero).
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Arithmetic mean rounded to one decimal; 0 for an empty slice.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: f64 = values.iter().sum();
    round_one_decimal(sum / values.len() as f64)
}

/// Mean of one nutrient field across `items`.
pub fn average_field(items: &[NutritionProfile], field: NutrientField) -> f64 {
    let values: Vec<f64> = items.iter().map(|p| field.value_of(p)).collect();
    average(&values)
}

/// First profile whose `field` is strictly better than every earlier one.
///
/// `better(candidate, current)` must return true only when `candidate`
/// should replace `current`; ties therefore keep the earliest record.
fn first_best_by<F>(
    items: &[NutritionProfile],
    field: NutrientField,
    better: F,
) -> Option<&NutritionProfile>
where
    F: Fn(f64, f64) -> bool,
{
    let mut best: Option<&NutritionProfile> = None;
    for profile in items {
        match best {
            Some(current) if !better(field.value_of(profile), field.value_of(current)) => {}
            _ => best = Some(profile),
        }
    }
    best
}

/// Diet name with the highest protein; first in input order wins ties.
pub fn best_by_protein(items: &[NutritionProfile]) -> Option<String> {
    first_best_by(items, NutrientField::Protein, |candidate, current| {
        candidate > current
    })
    .map(|p| p.diet_name.clone())
}

/// Diet name with the lowest carbs; first in input order wins ties.
pub fn best_by_carbs(items: &[NutritionProfile]) -> Option<String> {
    first_best_by(items, NutrientField::Carbs, |candidate, current| {
        candidate < current
    })
    .map(|p| p.diet_name.clone())
}

/// Count, per-field averages, and best-in-category labels.
pub fn summarize(items: &[NutritionProfile]) -> SummaryStats {
    SummaryStats {
        total_diet_types: items.len(),
        avg_calories: average_field(items, NutrientField::Calories),
        avg_protein: average_field(items, NutrientField::Protein),
        avg_carbs: average_field(items, NutrientField::Carbs),
        avg_fat: average_field(items, NutrientField::Fat),
        best_high_protein: best_by_protein(items),
        best_low_carb: best_by_carbs(items),
    }
}

fn diet_labels(items: &[NutritionProfile]) -> Vec<String> {
    items.iter().map(|p| p.diet_name.clone()).collect()
}

fn series(items: &[NutritionProfile], field: NutrientField) -> BarDataset {
    BarDataset {
        label: field.label().to_string(),
        data: items.iter().map(|p| field.value_of(p)).collect(),
    }
}

/// Protein / carbs / fat grouped per diet label, in input order.
pub fn bar_data(items: &[NutritionProfile]) -> BarData {
    BarData {
        labels: diet_labels(items),
        datasets: vec![
            series(items, NutrientField::Protein),
            series(items, NutrientField::Carbs),
            series(items, NutrientField::Fat),
        ],
    }
}

/// One `(carbs, protein)` point per profile.
pub fn scatter_data(items: &[NutritionProfile]) -> ScatterData {
    ScatterData {
        datasets: vec![ScatterDataset {
            label: SCATTER_LABEL.to_string(),
            data: items
                .iter()
                .map(|p| ScatterPoint {
                    x: p.carbs,
                    y: p.protein,
                })
                .collect(),
        }],
    }
}

/// Calories keyed by diet label.
pub fn pie_data(items: &[NutritionProfile]) -> PieData {
    PieData {
        labels: diet_labels(items),
        datasets: vec![PieDataset {
            data: items.iter().map(|p| p.calories).collect(),
        }],
    }
}

/// The fixed 4×4 heatmap.
pub fn correlation_matrix() -> Heatmap {
    Heatmap {
        labels: NutrientField::ALL
            .iter()
            .map(|f| f.label().to_string())
            .collect(),
        values: CORRELATION_MATRIX.iter().map(|row| row.to_vec()).collect(),
    }
}

/// Every chart structure for one filtered profile set.
pub fn to_chart_bundle(items: &[NutritionProfile]) -> ChartBundle {
    ChartBundle {
        bar_data: bar_data(items),
        scatter_data: scatter_data(items),
        pie_data: pie_data(items),
        heatmap: correlation_matrix(),
    }
}
