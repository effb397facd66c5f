use employee_service::config::{EmployeeConfig, StoreBackend};
use employee_service::services::EmployeeStore;
use employee_service::startup::Application;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub store: Arc<dyn EmployeeStore>,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the service on a random port, backed by the in-memory store.
    pub async fn spawn() -> Self {
        let mut config = EmployeeConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.store.backend = StoreBackend::Memory;

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let store = app.store();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            store,
            client,
        }
    }

    pub async fn create_employee(&self, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}/employees", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_employee(&self, id: &str) -> reqwest::Response {
        self.client
            .get(format!("{}/employees/{}", self.address, id))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn list_employees(&self) -> reqwest::Response {
        self.client
            .get(format!("{}/employees", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_employee(&self, id: &str) -> reqwest::Response {
        self.client
            .delete(format!("{}/employees/{}", self.address, id))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

pub fn asha() -> Value {
    json!({
        "name": "Asha",
        "designation": "Engineer",
        "department": "R&D",
        "salary": 95000
    })
}
