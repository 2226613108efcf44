//! End-to-end tests: a fake Nominatim/STAC upstream and the Campo router,
//! both served on ephemeral local ports.

use std::net::SocketAddr;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use campo_config::{CampoConfig, GeocodeConfig, SatelliteConfig};
use campo_server::{AppState, build_router};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve") });
    addr
}

fn feature(id: &str, datetime: &str, cloud: f64) -> Value {
    json!({
        "id": id,
        "properties": { "datetime": datetime, "eo:cloud_cover": cloud },
        "assets": { "visual": { "href": format!("https://img.test/{id}.tif") } }
    })
}

/// Fake upstream. The STAC response depends on the requested bbox's first
/// coordinate so one server can play several scenarios.
fn fake_upstream() -> Router {
    async fn nominatim(Query(params): Query<Vec<(String, String)>>) -> (StatusCode, Json<Value>) {
        let q = params
            .iter()
            .find(|(k, _)| k == "q")
            .map(|(_, v)| v.clone())
            .unwrap_or_default();
        if q == "upstream-down" {
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "detail": "nominatim overloaded" })),
            );
        }
        (
            StatusCode::OK,
            Json(json!([{ "display_name": q, "lat": "-22.85", "lon": "-47.05", "place_id": 42 }])),
        )
    }

    async fn stac(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        let min_lng = body["bbox"][0].as_f64().unwrap_or_default();
        let features = match min_lng as i64 {
            -10 => vec![
                feature("clear-old", "2026-03-01T13:00:00Z", 5.0),
                feature("cloudy-new", "2026-03-20T13:00:00Z", 45.0),
                feature("clear-mid", "2026-03-10T13:00:00Z", 20.0),
            ],
            -20 => vec![
                feature("cloudy-a", "2026-03-01T13:00:00Z", 30.0),
                feature("cloudy-b", "2026-03-15T13:00:00Z", 90.0),
            ],
            -30 => vec![],
            -40 => vec![json!({
                "id": "no-assets",
                "properties": { "datetime": "2026-03-01T13:00:00Z", "eo:cloud_cover": 1.0 },
                "assets": {}
            })],
            _ => return (StatusCode::BAD_GATEWAY, Json(json!({ "detail": "catalog down" }))),
        };
        (StatusCode::OK, Json(json!({ "type": "FeatureCollection", "features": features })))
    }

    Router::new()
        .route("/search", get(nominatim))
        .route("/stac/search", post(stac))
}

async fn spawn_campo() -> String {
    let upstream = spawn(fake_upstream()).await;
    let config = CampoConfig {
        geocode: GeocodeConfig {
            base_url: format!("http://{upstream}"),
            ..GeocodeConfig::default()
        },
        satellite: SatelliteConfig {
            stac_url: format!("http://{upstream}/stac"),
            ..SatelliteConfig::default()
        },
        ..CampoConfig::default()
    };
    let state = AppState::from_config(&config).expect("app state");
    let addr = spawn(build_router(state)).await;
    format!("http://{addr}")
}

async fn post_bbox(base: &str, body: Value) -> (u16, Value) {
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/satellite"))
        .json(&body)
        .send()
        .await
        .expect("request");
    let status = resp.status().as_u16();
    (status, resp.json().await.expect("json body"))
}

#[tokio::test]
async fn health_reports_ok() {
    let base = spawn_campo().await;
    let body: Value = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn geocode_passes_upstream_json_through() {
    let base = spawn_campo().await;
    let resp = reqwest::get(format!("{base}/api/geocode?q=Fazenda%20Boa%20Vista"))
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!([{ "display_name": "Fazenda Boa Vista", "lat": "-22.85", "lon": "-47.05", "place_id": 42 }])
    );
}

#[tokio::test]
async fn geocode_without_query_is_400() {
    let base = spawn_campo().await;
    for url in [format!("{base}/api/geocode"), format!("{base}/api/geocode?q=%20")] {
        let resp = reqwest::get(url).await.unwrap();
        assert_eq!(resp.status().as_u16(), 400);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body, json!({ "error": "Query parameter \"q\" is required" }));
    }
}

#[tokio::test]
async fn geocode_malformed_query_is_json_400() {
    let base = spawn_campo().await;
    let resp = reqwest::get(format!("{base}/api/geocode?q=Campinas&q=Jundiai"))
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn geocode_upstream_failure_is_500_without_detail() {
    let base = spawn_campo().await;
    let resp = reqwest::get(format!("{base}/api/geocode?q=upstream-down"))
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 500);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Upstream service request failed" }));
}

#[tokio::test]
async fn satellite_picks_most_recent_clear_scene() {
    let base = spawn_campo().await;
    let (status, body) = post_bbox(&base, json!({ "bbox": [-10.0, -10.0, -9.0, -9.0] })).await;
    assert_eq!(status, 200);
    assert_eq!(body["imageUrl"], "https://img.test/clear-mid.tif");
    assert_eq!(body["cloudCover"], 20.0);
    assert!(body["date"].as_str().unwrap().starts_with("2026-03-10T13:00:00"));
}

#[tokio::test]
async fn satellite_falls_back_to_latest_when_all_cloudy() {
    let base = spawn_campo().await;
    let (status, body) = post_bbox(&base, json!({ "bbox": [-20.0, -10.0, -19.0, -9.0] })).await;
    assert_eq!(status, 200);
    assert_eq!(body["imageUrl"], "https://img.test/cloudy-b.tif");
    assert_eq!(body["cloudCover"], 90.0);
}

#[tokio::test]
async fn satellite_not_found_cases() {
    let base = spawn_campo().await;
    for bbox in [json!([-30.0, -10.0, -29.0, -9.0]), json!([-40.0, -10.0, -39.0, -9.0])] {
        let (status, body) = post_bbox(&base, json!({ "bbox": bbox })).await;
        assert_eq!(status, 404, "{bbox}");
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn satellite_rejects_malformed_bbox() {
    let base = spawn_campo().await;
    for body in [
        json!({}),
        json!({ "bbox": [1.0, 2.0, 3.0] }),
        json!({ "bbox": [5.0, 2.0, 3.0, 4.0] }),
        json!({ "bbox": [1.0, 95.0, 3.0, 96.0] }),
        json!({ "bbox": "1,2,3,4" }),
    ] {
        let (status, reply) = post_bbox(&base, body.clone()).await;
        assert_eq!(status, 400, "{body}");
        assert!(reply["error"].is_string());
    }

    let resp = reqwest::Client::new()
        .post(format!("{base}/api/satellite"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
}

#[tokio::test]
async fn satellite_upstream_failure_is_500_without_detail() {
    let base = spawn_campo().await;
    let (status, body) = post_bbox(&base, json!({ "bbox": [-50.0, -10.0, -49.0, -9.0] })).await;
    assert_eq!(status, 500);
    let message = body["error"].as_str().unwrap();
    assert!(!message.contains("catalog down"));
}
