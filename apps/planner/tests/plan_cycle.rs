//! End-to-end request/render cycle against a stub roadmap API.
//!
//! Each test spins up an Axum server on a random port and drives the real
//! HTTP client through the controller.

use std::sync::Arc;
use std::time::Duration;

use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use career_planner::client::HttpPlanClient;
use career_planner::controller::PlanRequestController;
use career_planner::form::ProfileInput;
use career_planner::view::render_roadmap;

fn roadmap_json() -> Value {
    json!({
        "summary": "Lean on your Python to move into ML engineering.",
        "skill_gaps": ["PyTorch", "Docker"],
        "study_plan": (1..=4).map(|n| json!({
            "week_number": n,
            "focus_area": format!("Focus {n}"),
            "tasks": [format!("Task {n}.1"), format!("Task {n}.2")]
        })).collect::<Vec<_>>(),
        "learning_resources": ["fast.ai", "Full Stack Deep Learning"],
        "next_steps": ["Install PyTorch", "Clone a starter repo", "Book study time"]
    })
}

/// Start a stub API on a random port and return its base URL.
async fn start_server(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start accepting connections.
    tokio::time::sleep(Duration::from_millis(50)).await;

    format!("http://127.0.0.1:{port}")
}

fn controller_for(base_url: &str) -> PlanRequestController {
    PlanRequestController::new(Arc::new(HttpPlanClient::new(base_url)))
}

fn scenario_input() -> ProfileInput {
    ProfileInput {
        degree: "BSc CS".to_string(),
        skills: "Python, SQL".to_string(),
        target_role: "AI Engineer".to_string(),
        daily_hours: "2".to_string(),
    }
}

#[tokio::test]
async fn test_success_renders_full_roadmap() {
    let app = Router::new().route(
        "/api/career-plan",
        post(|Json(profile): Json<Value>| async move {
            // The posted body is the normalized profile.
            assert_eq!(profile["skills"], json!(["Python", "SQL"]));
            assert_eq!(profile["daily_hours"], json!(2));
            Json(roadmap_json())
        }),
    );
    let base = start_server(app).await;
    let controller = controller_for(&base);

    let profile = scenario_input().submit().unwrap();
    assert!(controller.submit(&profile).await);

    let state = controller.state();
    assert!(!state.is_loading());
    assert!(state.error().is_none());
    let roadmap = state.roadmap().expect("roadmap after 200");

    let out = render_roadmap(roadmap);
    assert!(out.contains("Lean on your Python to move into ML engineering."));
    assert!(out.contains("[PyTorch] [Docker]"));
    assert_eq!(out.lines().filter(|l| l.starts_with("Week ")).count(), 4);
    assert!(out.contains("  1. Install PyTorch"));
    assert!(out.contains("  3. Book study time"));

    assert!(controller.reset());
    assert!(controller.state().shows_form());
}

#[tokio::test]
async fn test_server_error_shows_generic_message() {
    let app = Router::new().route(
        "/api/career-plan",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": {"code": "LLM_ERROR", "message": "upstream down"}})),
            )
        }),
    );
    let base = start_server(app).await;
    let controller = controller_for(&base);

    controller.submit(&scenario_input().submit().unwrap()).await;

    let state = controller.state();
    assert!(!state.is_loading());
    assert!(state.roadmap().is_none());
    assert_eq!(
        state.error(),
        Some("Failed to generate plan. Please try again.")
    );
}

#[tokio::test]
async fn test_malformed_roadmap_fails_instead_of_rendering() {
    let app = Router::new().route(
        "/api/career-plan",
        post(|| async { Json(json!({"summary": "only a summary"})) }),
    );
    let base = start_server(app).await;
    let controller = controller_for(&base);

    controller.submit(&scenario_input().submit().unwrap()).await;

    let state = controller.state();
    assert!(state.roadmap().is_none());
    assert_eq!(
        state.error(),
        Some("Received an invalid plan from the server. Please try again.")
    );
}

#[tokio::test]
async fn test_unreachable_api_surfaces_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let controller = controller_for(&format!("http://127.0.0.1:{port}"));
    assert!(controller.submit(&scenario_input().submit().unwrap()).await);

    let state = controller.state();
    assert!(!state.is_loading());
    let message = state.error().expect("error after connection failure");
    assert!(!message.is_empty());
    assert_ne!(message, "Failed to generate plan. Please try again.");
}
