use super::*;
use std::sync::Arc;

use axum::{http::StatusCode, routing::post, Json, Router};
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

fn lisbon_request() -> TripRequest {
    TripRequest {
        age: "29".into(),
        gender: "female".into(),
        personality: "adventurous".into(),
        days: "5".into(),
        origin: "Boston".into(),
        destination: "Lisbon".into(),
    }
}

async fn serve(app: Router) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

async fn serve_fixed(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().route(
        "/plan",
        post(move || async move { (status, [("content-type", "application/json")], body) }),
    );
    serve(app).await
}

#[test]
fn plan_url_joins_the_route_onto_the_base() {
    let planner = HttpPlanner::new("http://localhost:5000/", DEFAULT_REQUEST_TIMEOUT)
        .expect("planner");
    assert_eq!(planner.plan_url().as_str(), "http://localhost:5000/plan");

    let nested = HttpPlanner::new("https://planner.example/api", DEFAULT_REQUEST_TIMEOUT)
        .expect("planner");
    assert_eq!(nested.plan_url().as_str(), "https://planner.example/api/plan");
}

#[test]
fn rejects_unusable_endpoints() {
    assert!(matches!(
        HttpPlanner::new("not a url", DEFAULT_REQUEST_TIMEOUT),
        Err(SubmissionError::InvalidEndpoint { .. })
    ));
    assert!(matches!(
        HttpPlanner::new("ftp://planner.example", DEFAULT_REQUEST_TIMEOUT),
        Err(SubmissionError::UnsupportedScheme { .. })
    ));
}

#[test]
fn long_error_bodies_are_truncated() {
    let body = "x".repeat(MAX_ERROR_DETAIL_CHARS + 10);
    let detail = truncate_detail(&body);
    assert_eq!(detail.len(), MAX_ERROR_DETAIL_CHARS + 3);
    assert!(detail.ends_with("..."));
    assert_eq!(truncate_detail("  short  "), "short");
}

#[tokio::test]
async fn posts_the_full_request_as_json() {
    let (tx, rx) = oneshot::channel::<serde_json::Value>();
    let tx = Arc::new(Mutex::new(Some(tx)));
    let app = Router::new().route(
        "/plan",
        post(move |Json(body): Json<serde_json::Value>| {
            let tx = tx.clone();
            async move {
                if let Some(tx) = tx.lock().await.take() {
                    let _ = tx.send(body);
                }
                Json(serde_json::json!({ "itinerary": {} }))
            }
        }),
    );
    let base = serve(app).await;

    let planner = HttpPlanner::new(&base, DEFAULT_REQUEST_TIMEOUT).expect("planner");
    let itinerary = planner.plan(&lisbon_request()).await.expect("plan");
    assert!(itinerary.is_empty());

    let received = rx.await.expect("request body");
    assert_eq!(
        received,
        serde_json::json!({
            "age": "29",
            "gender": "female",
            "personality": "adventurous",
            "days": "5",
            "origin": "Boston",
            "destination": "Lisbon",
        })
    );
}

#[tokio::test]
async fn decodes_the_itinerary_envelope() {
    let base = serve_fixed(
        StatusCode::OK,
        r#"{"itinerary": {
            "Day 1": {"title": "Arrival", "activities": [{"name": "Check-in", "location": "Hotel",
                "description": "...", "suitability": "...", "reviews": "..."}]},
            "Day 2": {"title": "Belem", "activities": []}
        }}"#,
    )
    .await;

    let planner = HttpPlanner::new(&base, DEFAULT_REQUEST_TIMEOUT).expect("planner");
    let itinerary = planner.plan(&lisbon_request()).await.expect("plan");

    let keys: Vec<&str> = itinerary.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["Day 1", "Day 2"]);
    assert_eq!(itinerary.activity_count(), 1);
}

#[tokio::test]
async fn accepts_legacy_plan_envelope() {
    let base = serve_fixed(
        StatusCode::OK,
        r#"{"success": true, "plan": [
            {"date": "Day 1", "activities": [{"name": "Alfama walk", "why_its_suitable": "curious"}]}
        ]}"#,
    )
    .await;

    let planner = HttpPlanner::new(&base, DEFAULT_REQUEST_TIMEOUT).expect("planner");
    let itinerary = planner.plan(&lisbon_request()).await.expect("plan");
    let day = itinerary.get("Day 1").expect("day");
    assert_eq!(day.activities[0].suitability, "curious");
}

#[tokio::test]
async fn server_error_status_is_a_failure() {
    let base = serve_fixed(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"success": false, "error": "crew crashed"}"#,
    )
    .await;

    let planner = HttpPlanner::new(&base, DEFAULT_REQUEST_TIMEOUT).expect("planner");
    let err = planner
        .plan(&lisbon_request())
        .await
        .expect_err("500 must fail");
    match err {
        SubmissionError::Status { status, detail } => {
            assert_eq!(status, 500);
            assert!(detail.contains("crew crashed"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn unsuccessful_body_with_ok_status_is_a_failure() {
    let base = serve_fixed(
        StatusCode::OK,
        r#"{"success": false, "error": "No valid travel plan was generated."}"#,
    )
    .await;

    let planner = HttpPlanner::new(&base, DEFAULT_REQUEST_TIMEOUT).expect("planner");
    let err = planner.plan(&lisbon_request()).await.expect_err("must fail");
    assert!(matches!(err, SubmissionError::Service(detail) if detail.contains("No valid")));
}

#[tokio::test]
async fn malformed_bodies_are_failures() {
    for body in ["not json", r#"{"itinerary": []}"#, r#"{"other": 1}"#] {
        let base = serve_fixed(StatusCode::OK, body).await;
        let planner = HttpPlanner::new(&base, DEFAULT_REQUEST_TIMEOUT).expect("planner");
        let err = planner.plan(&lisbon_request()).await.expect_err(body);
        assert!(
            matches!(err, SubmissionError::Malformed(_)),
            "{body} gave {err}"
        );
        assert_eq!(err.user_message(), crate::error::SUBMISSION_FAILED_MESSAGE);
    }
}

#[tokio::test]
async fn slow_planner_times_out() {
    let app = Router::new().route(
        "/plan",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(serde_json::json!({ "itinerary": {} }))
        }),
    );
    let base = serve(app).await;

    let planner = HttpPlanner::new(&base, Duration::from_millis(200)).expect("planner");
    let err = planner.plan(&lisbon_request()).await.expect_err("timeout");
    assert!(matches!(err, SubmissionError::TimedOut(timeout) if timeout == Duration::from_millis(200)));
}

#[tokio::test]
async fn unreachable_planner_is_a_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let planner =
        HttpPlanner::new(&format!("http://{addr}"), Duration::from_secs(5)).expect("planner");
    let err = planner.plan(&lisbon_request()).await.expect_err("refused");
    assert!(matches!(err, SubmissionError::Transport(_)), "{err}");
}
