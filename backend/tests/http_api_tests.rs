//! End-to-end tests driving the axum router in-process.

#![cfg(feature = "http-server")]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use nutri_insights::db::repositories::LocalRepository;
use nutri_insights::db::repository::FullRepository;
use nutri_insights::http::{create_router, AppState};

fn demo_app() -> Router {
    let repo = Arc::new(LocalRepository::with_demo_data()) as Arc<dyn FullRepository>;
    create_router(AppState::new(repo))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_root_reports_running() {
    let (status, body) = get(demo_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["message"], "Nutritional Insights Backend Running");
}

#[tokio::test]
async fn test_health_reports_store_status() {
    let (status, body) = get(demo_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn test_insights_over_demo_set() {
    let (status, body) = get(
        demo_app(),
        "/api/insights?dietType=all&q=&page=1&pageSize=10",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let summary = &body["summary"];
    assert_eq!(summary["totalDietTypes"], 5);
    assert_eq!(summary["avgCalories"].as_f64(), Some(460.0));
    assert_eq!(summary["avgProtein"].as_f64(), Some(24.2));
    assert_eq!(summary["avgCarbs"].as_f64(), Some(36.0));
    assert_eq!(summary["avgFat"].as_f64(), Some(30.6));
    assert_eq!(summary["bestHighProtein"], "Keto");
    assert_eq!(summary["bestLowCarb"], "Keto");

    let meta = &body["meta"];
    assert_eq!(meta["page"], 1);
    assert_eq!(meta["pageSize"], 10);
    assert_eq!(meta["total"], 5);
    assert_eq!(meta["dietType"], "all");
    assert_eq!(meta["q"], "");
}

#[tokio::test]
async fn test_insights_chart_shapes() {
    let (_, body) = get(demo_app(), "/api/insights").await;

    let labels = body["barData"]["labels"].as_array().unwrap();
    assert_eq!(labels[0], "Vegan");
    assert_eq!(labels.len(), 5);

    let series: Vec<&str> = body["barData"]["datasets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["label"].as_str().unwrap())
        .collect();
    assert_eq!(series, vec!["Protein", "Carbs", "Fat"]);

    let keto_point = &body["scatterData"]["datasets"][0]["data"][1];
    assert_eq!(keto_point["x"].as_f64(), Some(10.0));
    assert_eq!(keto_point["y"].as_f64(), Some(30.0));

    assert_eq!(body["pieData"]["datasets"][0]["data"][1].as_f64(), Some(530.0));

    let heatmap = body["heatmap"]["values"].as_array().unwrap();
    assert_eq!(heatmap.len(), 4);
    assert_eq!(heatmap[0][3].as_f64(), Some(0.7));
}

#[tokio::test]
async fn test_insights_diet_filter_is_case_insensitive() {
    let (_, body) = get(demo_app(), "/api/insights?dietType=KETO").await;
    assert_eq!(body["meta"]["total"], 1);
    assert_eq!(body["meta"]["dietType"], "keto");
    assert_eq!(body["barData"]["labels"][0], "Keto");
}

#[tokio::test]
async fn test_vegan_recipes() {
    let (status, body) = get(demo_app(), "/api/recipes?dietType=vegan").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 2);

    let recipes = body["recipes"].as_array().unwrap();
    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0]["id"], 1);
    assert_eq!(recipes[0]["name"], "Vegan Bowl");
    assert_eq!(recipes[0]["dietType"], "vegan");
    assert_eq!(recipes[1]["name"], "Vegan Lentil Soup");
}

#[tokio::test]
async fn test_recipes_pagination_window() {
    let (_, body) = get(demo_app(), "/api/recipes?page=3&pageSize=3").await;
    let ids: Vec<i64> = body["recipes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![7, 8]);
    assert_eq!(body["meta"]["total"], 8);

    let (_, body) = get(demo_app(), "/api/recipes?page=4&pageSize=3").await;
    assert!(body["recipes"].as_array().unwrap().is_empty());
    assert_eq!(body["meta"]["total"], 8);
}

#[tokio::test]
async fn test_malformed_numbers_are_coerced() {
    let (status, body) = get(demo_app(), "/api/recipes?page=abc&pageSize=-4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["page"], 1);
    assert_eq!(body["meta"]["pageSize"], 1);
    assert_eq!(body["recipes"].as_array().unwrap().len(), 1);

    let (_, body) = get(demo_app(), "/api/recipes?page=2.7&pageSize=0").await;
    assert_eq!(body["meta"]["page"], 2);
    assert_eq!(body["meta"]["pageSize"], 1);
    assert_eq!(body["recipes"][0]["id"], 2);
}

#[tokio::test]
async fn test_text_query_matches_substring() {
    let (_, body) = get(demo_app(), "/api/insights?q=VEG").await;
    let labels: Vec<&str> = body["barData"]["labels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l.as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["Vegan", "Vegetarian"]);
    assert_eq!(body["meta"]["q"], "veg");
}

#[tokio::test]
async fn test_empty_match_summary() {
    let (status, body) = get(demo_app(), "/api/insights?dietType=carnivore").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["totalDietTypes"], 0);
    assert_eq!(body["summary"]["avgCalories"].as_f64(), Some(0.0));
    assert!(body["summary"]["bestHighProtein"].is_null());
    assert!(body["summary"]["bestLowCarb"].is_null());
}

#[tokio::test]
async fn test_clusters_are_static() {
    let (status, body) = get(demo_app(), "/api/clusters").await;
    assert_eq!(status, StatusCode::OK);
    let clusters = body["clusters"].as_array().unwrap();
    assert_eq!(clusters.len(), 3);
    assert_eq!(clusters[0]["clusterId"], 1);
    assert_eq!(clusters[0]["name"], "High Protein");
    assert_eq!(clusters[2]["foods"][2], "Beans");
}

#[tokio::test]
async fn test_store_failure_is_500_with_message() {
    let repo = LocalRepository::with_demo_data();
    repo.set_healthy(false);
    let app = create_router(AppState::new(Arc::new(repo)));

    let (status, body) = get(app.clone(), "/api/recipes").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "REPOSITORY_ERROR");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Database is not healthy"));

    let (status, _) = get(app.clone(), "/api/insights").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    // Static data does not touch the store.
    let (status, _) = get(app.clone(), "/api/clusters").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "disconnected");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (status, body) = get(demo_app(), "/api/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}
