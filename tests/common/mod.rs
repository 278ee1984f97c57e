use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tokio::net::TcpListener;

use hevysync::models::Workout;
use hevysync::Config;

/// In-process stand-in for the Hevy listing endpoint. Serves a fixed,
/// newest-first workout sequence with real pagination semantics, counts
/// requests, and can be told to fail the Nth request with a 500.
#[derive(Clone)]
struct MockState {
    workouts: Arc<Vec<Workout>>,
    requests: Arc<AtomicUsize>,
    fail_on_request: Option<usize>,
}

#[derive(Deserialize)]
struct ListParams {
    page: usize,
    #[serde(rename = "pageSize")]
    page_size: usize,
}

async fn list_workouts(
    State(state): State<MockState>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> Response {
    let request_no = state.requests.fetch_add(1, Ordering::SeqCst) + 1;
    if state.fail_on_request == Some(request_no) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    if headers.get("api-key").is_none() {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let all = &state.workouts;
    let from = params.page.saturating_sub(1) * params.page_size;
    let to = (from + params.page_size).min(all.len());
    let slice: Vec<Workout> = if from >= all.len() {
        Vec::new()
    } else {
        all[from..to].to_vec()
    };
    let page_count = all.len().div_ceil(params.page_size.max(1)).max(1);

    Json(serde_json::json!({
        "page": params.page,
        "page_count": page_count,
        "workouts": slice,
    }))
    .into_response()
}

pub struct MockApi {
    pub base_url: String,
    requests: Arc<AtomicUsize>,
}

impl MockApi {
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn config(&self) -> Config {
        Config {
            api_key: "test-key".to_string(),
            api_base: self.base_url.clone(),
            vault_dir: "hevy".to_string(),
        }
    }
}

pub async fn serve_workouts(workouts: Vec<Workout>) -> MockApi {
    serve_workouts_failing(workouts, None).await
}

pub async fn serve_workouts_failing(
    workouts: Vec<Workout>,
    fail_on_request: Option<usize>,
) -> MockApi {
    let requests = Arc::new(AtomicUsize::new(0));
    let state = MockState {
        workouts: Arc::new(workouts),
        requests: requests.clone(),
        fail_on_request,
    };
    let app = Router::new()
        .route("/v1/workouts", get(list_workouts))
        .with_state(state);

    spawn(app, requests).await
}

/// Serve a fixed body with a 200 status from the listing route, whatever
/// the request. Used to exercise decode failures.
pub async fn serve_raw(body: &'static str) -> MockApi {
    let requests = Arc::new(AtomicUsize::new(0));
    let app = Router::new().route("/v1/workouts", get(move || async move { body }));

    spawn(app, requests).await
}

async fn spawn(app: Router, requests: Arc<AtomicUsize>) -> MockApi {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockApi {
        base_url: format!("http://{}", addr),
        requests,
    }
}

pub fn ts(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid RFC 3339 timestamp")
}

pub fn workout_at(id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Workout {
    Workout {
        id: id.to_string(),
        title: format!("Workout {}", id),
        description: String::new(),
        start_time: start,
        end_time: end,
        created_at: end,
        updated_at: end,
        exercises: Vec::new(),
    }
}
