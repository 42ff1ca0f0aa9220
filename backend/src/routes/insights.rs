use serde::{Deserialize, Serialize};

use super::meta::ResponseMeta;

pub const GET_INSIGHTS: &str = "/api/insights";

// =========================================================
// Chart types
// =========================================================

/// One named series of a grouped bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDataset {
    pub label: String,
    pub data: Vec<f64>,
}

/// Grouped bar chart: one label per diet, one dataset per nutrient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarData {
    pub labels: Vec<String>,
    pub datasets: Vec<BarDataset>,
}

/// Scatter coordinate (x = carbs, y = protein).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterDataset {
    pub label: String,
    pub data: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterData {
    pub datasets: Vec<ScatterDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieDataset {
    pub data: Vec<f64>,
}

/// Calorie shares keyed by diet label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieData {
    pub labels: Vec<String>,
    pub datasets: Vec<PieDataset>,
}

/// Square matrix of values labelled on both axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heatmap {
    pub labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

/// All chart-ready structures derived from one filtered profile set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBundle {
    pub bar_data: BarData,
    pub scatter_data: ScatterData,
    pub pie_data: PieData,
    pub heatmap: Heatmap,
}

// =========================================================
// Summary types
// =========================================================

/// Aggregate statistics over a filtered profile set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_diet_types: usize,
    pub avg_calories: f64,
    pub avg_protein: f64,
    pub avg_carbs: f64,
    pub avg_fat: f64,
    /// Diet with the highest protein; `None` for an empty set.
    pub best_high_protein: Option<String>,
    /// Diet with the lowest carbs; `None` for an empty set.
    pub best_low_carb: Option<String>,
}

/// Complete `/api/insights` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsResponse {
    #[serde(flatten)]
    pub charts: ChartBundle,
    pub summary: SummaryStats,
    pub meta: ResponseMeta,
}
