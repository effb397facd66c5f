//! Application startup and lifecycle management.

use crate::config::{EmployeeConfig, StoreBackend};
use crate::handlers;
use crate::services::{EmployeeService, EmployeeStore, InMemoryEmployeeStore, MongoEmployeeStore};
use axum::{middleware::from_fn, routing::get, Router};
use service_core::error::AppError;
use service_core::middleware::{metrics_middleware, request_id_middleware, REQUEST_ID_HEADER};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EmployeeStore>,
    pub employees: EmployeeService,
}

impl AppState {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self {
            employees: EmployeeService::new(store.clone()),
            store,
        }
    }
}

/// Build the HTTP router for the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::hello))
        .route("/ping", get(handlers::ping))
        .route(
            "/employees",
            get(handlers::list_employees).post(handlers::create_employee),
        )
        .route(
            "/employees/:id",
            get(handlers::get_employee).delete(handlers::delete_employee),
        )
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

async fn open_store(config: &EmployeeConfig) -> Result<Arc<dyn EmployeeStore>, AppError> {
    match config.store.backend {
        StoreBackend::MongoDb => {
            let store = MongoEmployeeStore::connect(&config.mongodb.uri, &config.mongodb.database)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to connect to MongoDB: {}", e);
                    e
                })?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory employee store; records are not persisted");
            Ok(Arc::new(InMemoryEmployeeStore::new()))
        }
    }
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: EmployeeConfig) -> Result<Self, AppError> {
        let store = open_store(&config).await?;
        let state = AppState::new(store);

        // Port 0 picks a random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Employee service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn store(&self) -> Arc<dyn EmployeeStore> {
        self.state.store.clone()
    }

    /// Serve until Ctrl+C or SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, router(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, EmployeeDraft};
    use crate::services::StoreError;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use mongodb::bson::oid::ObjectId;
    use tower::ServiceExt;

    /// A store whose backend is unreachable.
    struct FailingStore;

    fn unreachable() -> StoreError {
        StoreError::from(mongodb::error::Error::from(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }

    #[async_trait]
    impl EmployeeStore for FailingStore {
        async fn find_all(&self) -> Result<Vec<Employee>, StoreError> {
            Err(unreachable())
        }

        async fn insert(&self, _draft: EmployeeDraft) -> Result<Employee, StoreError> {
            Err(unreachable())
        }

        async fn find_by_id(&self, _id: &ObjectId) -> Result<Option<Employee>, StoreError> {
            Err(unreachable())
        }

        async fn delete_by_id(&self, _id: &ObjectId) -> Result<bool, StoreError> {
            Err(unreachable())
        }

        async fn health_check(&self) -> Result<(), StoreError> {
            Err(unreachable())
        }
    }

    fn test_router() -> Router {
        router(AppState::new(Arc::new(InMemoryEmployeeStore::new())))
    }

    fn failing_router() -> Router {
        router(AppState::new(Arc::new(FailingStore)))
    }

    fn create_request() -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/employees")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"name":"Asha","designation":"Engineer","department":"R&D","salary":95000}"#,
            ))
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
    }

    #[tokio::test]
    async fn add_employee_path_is_not_routed() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/employees/addEmployee")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name":"Asha"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn create_without_content_type_is_bad_request() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/employees")
                    .body(Body::from(r#"{"name":"Asha"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.is_empty());
    }

    #[tokio::test]
    async fn created_employee_is_served_by_same_router() {
        let app = test_router();

        let response = app.clone().oneshot(create_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let created: serde_json::Value =
            serde_json::from_str(&body_text(response).await).unwrap();
        let id = created["id"].as_str().unwrap();
        assert!(ObjectId::parse_str(id).is_ok());

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/employees/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let fetched: serde_json::Value =
            serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn store_failure_on_create_is_bad_request_with_empty_body() {
        let response = failing_router().oneshot(create_request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.is_empty());
    }

    #[tokio::test]
    async fn store_failure_on_reads_and_delete_is_database_error() {
        let id = ObjectId::new().to_hex();
        let requests = [
            ("GET", "/employees".to_string()),
            ("GET", format!("/employees/{}", id)),
            ("DELETE", format!("/employees/{}", id)),
        ];

        for (method, uri) in requests {
            let response = failing_router()
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri(&uri)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(
                response.status(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "{} {}",
                method,
                uri
            );
            let body: serde_json::Value =
                serde_json::from_str(&body_text(response).await).unwrap();
            assert_eq!(body["error"], "Database error", "{} {}", method, uri);
        }
    }

    #[tokio::test]
    async fn unreachable_store_fails_health_but_not_ping() {
        let response = failing_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = failing_router()
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "pong ping pong");
    }
}
