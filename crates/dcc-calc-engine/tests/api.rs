//! ---
//! dcc_section: "02-formula-engine"
//! dcc_subsection: "integration-tests"
//! dcc_type: "source"
//! dcc_scope: "code"
//! dcc_description: "HTTP route checks for the calculator API."
//! dcc_version: "v0.1.0"
//! dcc_owner: "tbd"
//! ---
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use dcc_calc_engine::api::{router, HealthResponse};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn post(path: &str, body: Value) -> (StatusCode, Value) {
    let response = router()
        .oneshot(
            Request::post(path)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let response = router()
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(health.status, "ok");
}

#[tokio::test]
async fn kvl_endpoint_solves_loop() {
    let (status, body) = post(
        "/api/calc/kvl",
        json!({"source_voltage": 12.0, "resistances": [4.0, 6.0, 2.0]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["loop_current"], 1.0);
    assert_eq!(body["element_voltages"], json!([4.0, 6.0, 2.0]));
}

#[tokio::test]
async fn resistance_endpoint_rejects_bad_sets() {
    let (status, _) = post(
        "/api/calc/resistance",
        json!({"topology": "parallel", "resistors": [10.0]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = post(
        "/api/calc/resistance",
        json!({"topology": "parallel", "resistors": [0.0, 10.0]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 10.0);
}

#[tokio::test]
async fn evaluate_endpoint_dispatches_on_tag() {
    let (status, body) = post(
        "/api/calc/evaluate",
        json!({"calculator": "advisory", "power": 1500.0, "voltage": 250.0, "current": 15.0}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["calculator"], "advisory");
    assert_eq!(body["rating"], "Overload");
}

#[tokio::test]
async fn malformed_bodies_are_bad_requests_on_every_route() {
    let (status, _) = post(
        "/api/calc/evaluate",
        json!({"calculator": "resistance", "topology": "parallel", "resistors": [10.0]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(
        "/api/calc/kvl",
        json!({"source_voltage": 12.0, "resistances": [4.0, 6.0]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post("/api/calc/ohm", json!({"voltage": 12.0})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
