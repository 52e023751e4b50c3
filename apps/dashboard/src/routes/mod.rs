pub mod health;
pub mod status;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chatbot::handlers::handle_chat;
use crate::results::handlers;
use crate::state::AppState;
use crate::upload::handlers::handle_upload;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/status", get(status::status_handler))
        // Prototype page
        .route("/api/v1/upload", post(handle_upload))
        .route("/api/v1/match", post(handlers::handle_run_matching))
        // Results page
        .route("/api/v1/results/refresh", post(handlers::handle_refresh))
        .route(
            "/api/v1/results/filters",
            get(handlers::handle_get_filters).put(handlers::handle_apply_filters),
        )
        .route("/api/v1/results/summary", get(handlers::handle_summary))
        .route("/api/v1/results/table", get(handlers::handle_table))
        .route("/api/v1/results/teams", get(handlers::handle_teams))
        .route(
            "/api/v1/results/leaderboard",
            get(handlers::handle_leaderboard),
        )
        .route("/api/v1/results/charts", get(handlers::handle_charts))
        .route(
            "/api/v1/results/projects/:project_id/matches/:employee_id",
            get(handlers::handle_match_detail),
        )
        .route("/api/v1/report", get(handlers::handle_report))
        // FAQ widget
        .route("/api/v1/chat", post(handle_chat))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use bytes::Bytes;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::client::{ClientError, MatchingBackend};
    use crate::config::Config;
    use crate::models::results::fixtures::{make_match, make_project};
    use crate::models::results::ResultSet;
    use crate::models::status::DataStatus;
    use crate::upload::UploadedFile;

    /// In-memory matching service.
    #[derive(Default)]
    struct FakeBackend {
        results: Mutex<Option<ResultSet>>,
        status: DataStatus,
        uploads: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl MatchingBackend for FakeBackend {
        async fn data_status(&self) -> Result<DataStatus, ClientError> {
            Ok(self.status.clone())
        }

        async fn upload(&self, files: &[UploadedFile]) -> Result<Option<String>, ClientError> {
            let mut uploads = self.uploads.lock().unwrap();
            uploads.extend(files.iter().map(|f| f.file_name.clone()));
            Ok(Some("Files uploaded successfully".to_string()))
        }

        async fn run_matching(&self) -> Result<Option<String>, ClientError> {
            Ok(None)
        }

        async fn fetch_results(&self) -> Result<ResultSet, ClientError> {
            self.results
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| ClientError::NoData("No matching results available".to_string()))
        }

        async fn download_report(&self) -> Result<Bytes, ClientError> {
            Ok(Bytes::from_static(b"%PDF-1.4"))
        }
    }

    fn test_config() -> Config {
        Config {
            matching_api_url: "http://matching.test".to_string(),
            matching_api_timeout: None,
            load_on_startup: false,
            port: 0,
            rust_log: "info".to_string(),
        }
    }

    fn sample_results() -> ResultSet {
        vec![
            make_project(
                "P1",
                vec![
                    make_match("E1", "Ana Lima", "P1", 85.0),
                    make_match("E2", "John Doe", "P1", 55.0),
                ],
            ),
            make_project("P2", vec![make_match("E3", "Maria Costa", "P2", 72.0)]),
        ]
    }

    fn app_with(backend: FakeBackend) -> Router {
        build_router(AppState::new(Arc::new(backend), test_config()))
    }

    fn loaded_backend() -> FakeBackend {
        FakeBackend {
            results: Mutex::new(Some(sample_results())),
            ..Default::default()
        }
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap_or(Value::Null)
        };
        (status, value)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_req(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn refreshed(backend: FakeBackend) -> Router {
        let app = app_with(backend);
        let (status, _) = send(
            &app,
            Request::builder()
                .method("POST")
                .uri("/api/v1/results/refresh")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        app
    }

    #[tokio::test]
    async fn test_health() {
        let app = app_with(FakeBackend::default());
        let (status, body) = send(&app, get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_reads_before_load_report_no_data() {
        let app = app_with(FakeBackend::default());
        let (status, body) = send(&app, get_req("/api/v1/results/summary")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NO_DATA");
    }

    #[tokio::test]
    async fn test_refresh_without_results_is_no_data() {
        let app = app_with(FakeBackend::default());
        let (status, body) = send(
            &app,
            Request::builder()
                .method("POST")
                .uri("/api/v1/results/refresh")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "No matching results available");
    }

    #[tokio::test]
    async fn test_summary_after_refresh() {
        let app = refreshed(loaded_backend()).await;
        let (status, body) = send(&app, get_req("/api/v1/results/summary")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_projects"], 2);
        assert_eq!(body["total_employees"], 3);
        assert_eq!(body["high_quality_matches"], 1);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_results() {
        let backend = Arc::new(loaded_backend());
        let app = build_router(AppState::new(backend.clone(), test_config()));
        let refresh = || {
            Request::builder()
                .method("POST")
                .uri("/api/v1/results/refresh")
                .body(Body::empty())
                .unwrap()
        };

        let (status, _) = send(&app, refresh()).await;
        assert_eq!(status, StatusCode::OK);

        *backend.results.lock().unwrap() = None;
        let (status, body) = send(&app, refresh()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NO_DATA");

        let (status, body) = send(&app, get_req("/api/v1/results/summary")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_projects"], 2);
        assert_eq!(body["total_matches"], 3);
    }

    #[tokio::test]
    async fn test_filters_narrow_table_but_not_charts() {
        let app = refreshed(loaded_backend()).await;

        let (status, body) = send(
            &app,
            json_req("PUT", "/api/v1/results/filters", json!({"text": "ana"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rows"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["rows"][0]["employee_name"], "Ana Lima");
        assert_eq!(body["criteria"]["text"], "ana");

        let (_, table) = send(&app, get_req("/api/v1/results/table")).await;
        assert_eq!(table.as_array().map(Vec::len), Some(1));

        let (_, charts) = send(&app, get_req("/api/v1/results/charts")).await;
        let total: u64 = charts["scores"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["count"].as_u64().unwrap())
            .sum();
        assert_eq!(total, 3);
    }

    #[tokio::test]
    async fn test_filter_options() {
        let app = refreshed(loaded_backend()).await;
        let (status, body) = send(&app, get_req("/api/v1/results/filters")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["options"]["projects"].as_array().map(Vec::len), Some(2));
        assert_eq!(body["options"]["roles"], json!(["Full Time"]));
    }

    #[tokio::test]
    async fn test_match_detail_and_missing() {
        let app = refreshed(loaded_backend()).await;
        let (status, body) = send(&app, get_req("/api/v1/results/projects/P2/matches/E3")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["employee_name"], "Maria Costa");

        let (status, _) = send(&app, get_req("/api/v1/results/projects/P2/matches/E1")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_leaderboard_and_teams() {
        let app = refreshed(loaded_backend()).await;
        let (_, board) = send(&app, get_req("/api/v1/results/leaderboard")).await;
        assert_eq!(board[0]["employee_id"], "E1");

        let (_, teams) = send(&app, get_req("/api/v1/results/teams")).await;
        assert_eq!(teams.as_array().map(Vec::len), Some(2));
        assert_eq!(
            teams[0]["complementary_members"].as_array().map(Vec::len),
            Some(2)
        );
    }

    #[tokio::test]
    async fn test_match_requires_both_datasets() {
        let app = app_with(loaded_backend());
        let (status, body) = send(
            &app,
            Request::builder()
                .method("POST")
                .uri("/api/v1/match")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_match_loads_results() {
        let backend = FakeBackend {
            status: DataStatus {
                employees_count: 3,
                projects_count: 2,
                employees_loaded: true,
                projects_loaded: true,
            },
            ..loaded_backend()
        };
        let app = app_with(backend);
        let (status, body) = send(
            &app,
            Request::builder()
                .method("POST")
                .uri("/api/v1/match")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"]["total_matches"], 3);

        let (_, status_body) = send(&app, get_req("/api/v1/status")).await;
        assert_eq!(status_body["results_loaded"], true);
        assert_eq!(status_body["ready_for_matching"], true);
        assert_eq!(status_body["employees_count"], 3);
    }

    #[tokio::test]
    async fn test_chat() {
        let app = app_with(FakeBackend::default());
        let (status, body) = send(
            &app,
            json_req("POST", "/api/v1/chat", json!({"message": "How much does it cost?"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["topic"], "pricing");

        let (status, _) = send(&app, json_req("POST", "/api/v1/chat", json!({"message": "  "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    fn multipart_req(parts: &[(&str, &str, &str)]) -> Request<Body> {
        let boundary = "dashboard-test-boundary";
        let mut body = String::new();
        for (field, file_name, content) in parts {
            body.push_str(&format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n{content}\r\n"
            ));
        }
        body.push_str(&format!("--{boundary}--\r\n"));

        Request::builder()
            .method("POST")
            .uri("/api/v1/upload")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_upload_returns_previews() {
        let app = app_with(FakeBackend::default());
        let (status, body) = send(
            &app,
            multipart_req(&[("employees", "employees.csv", "Emp ID,Name\nE1,Ana Lima\n")]),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["files"][0]["dataset"], "employees");
        assert_eq!(body["files"][0]["preview"]["headers"], json!(["Emp ID", "Name"]));
        assert_eq!(body["files"][0]["preview"]["rows"][0][1], "Ana Lima");
    }

    #[tokio::test]
    async fn test_upload_rejects_non_csv() {
        let app = app_with(FakeBackend::default());
        let (status, body) = send(
            &app,
            multipart_req(&[("projects", "projects.xlsx", "binary")]),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_report_requires_loaded_results() {
        let app = app_with(loaded_backend());
        let (status, _) = send(&app, get_req("/api/v1/report")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let app = refreshed(loaded_backend()).await;
        let response = app.oneshot(get_req("/api/v1/report")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/pdf");
    }
}
