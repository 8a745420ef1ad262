#![allow(dead_code)]

mod db;

use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Duration;
use employee_service::admin::errors::AdminError;
use employee_service::admin::models::Admin;
use employee_service::admin::models::CreateAdminCommand;
use employee_service::admin::models::UpdateAdminCommand;
use employee_service::admin::ports::AdminServicePort;
use employee_service::domain::admin::service::AdminService;
use employee_service::domain::email::EmailAddress;
use employee_service::domain::employee::service::EmployeeService;
use employee_service::employee::errors::EmployeeError;
use employee_service::employee::models::Employee;
use employee_service::employee::models::EmployeeDetails;
use employee_service::employee::models::EmployeeId;
use employee_service::employee::ports::EmployeeServicePort;
use employee_service::inbound::http::router::create_router;
use employee_service::repositories::InMemoryStore;
use mockall::mock;
use serde_json::json;

pub use db::TestDb;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

mock! {
    pub TestEmployeeService {}

    #[async_trait]
    impl EmployeeServicePort for TestEmployeeService {
        async fn create_employee(&self, details: EmployeeDetails) -> Result<Employee, EmployeeError>;
        async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, EmployeeError>;
        async fn replace_employee(&self, id: &EmployeeId, details: EmployeeDetails) -> Result<Employee, EmployeeError>;
        async fn delete_employee(&self, id: &EmployeeId) -> Result<(), EmployeeError>;
    }
}

mock! {
    pub TestAdminService {}

    #[async_trait]
    impl AdminServicePort for TestAdminService {
        async fn create_admin(&self, command: CreateAdminCommand) -> Result<Admin, AdminError>;
        async fn get_admin(&self, email: &EmailAddress) -> Result<Admin, AdminError>;
        async fn update_admin(&self, email: &EmailAddress, command: UpdateAdminCommand) -> Result<Admin, AdminError>;
        async fn delete_admin(&self, email: &EmailAddress) -> Result<(), AdminError>;
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub authenticator: Arc<Authenticator>,
}

impl TestApp {
    /// Spawn the application over a fresh in-memory store
    pub async fn spawn() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let employee_service = Arc::new(EmployeeService::new(Arc::clone(&store)));
        let admin_service = Arc::new(AdminService::new(store));

        Self::spawn_with(employee_service, admin_service).await
    }

    /// Spawn the application over the given services (typically mocks).
    ///
    /// A mock call with no matching expectation panics inside the server,
    /// which surfaces as a failed request on the client side.
    pub async fn spawn_with(
        employee_service: Arc<dyn EmployeeServicePort>,
        admin_service: Arc<dyn AdminServicePort>,
    ) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(Authenticator::new(TEST_JWT_SECRET, Duration::hours(24)));

        let router = create_router(
            employee_service,
            admin_service,
            Arc::clone(&authenticator),
        );

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            authenticator,
        }
    }

    /// Spawn the application with mocks that accept no calls at all
    pub async fn spawn_without_store() -> Self {
        Self::spawn_with(
            Arc::new(MockTestEmployeeService::new()),
            Arc::new(MockTestAdminService::new()),
        )
        .await
    }

    /// Token signed with the server's key, for admin `id`
    pub fn token_for(&self, id: i64) -> String {
        self.authenticator
            .issue_token(id)
            .expect("Failed to issue token")
    }

    /// Token for an arbitrary admin id
    pub fn token(&self) -> String {
        self.token_for(1)
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PUT request
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.put(path).bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.delete(path).bearer_auth(token)
    }

    /// Register an admin through the public endpoint
    pub async fn create_admin(&self, email: &str, password: &str) -> serde_json::Value {
        let response = self
            .post("/admin")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Failed to parse response")
    }

    /// Log in and return the raw response
    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Create an admin, log in, and return the issued token
    pub async fn admin_token(&self, email: &str, password: &str) -> String {
        self.create_admin(email, password).await;

        let response = self.login(email, password).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"]
            .as_str()
            .expect("Missing token in login response")
            .to_string()
    }

    /// Create an employee and return its JSON representation
    pub async fn create_employee(&self, token: &str, body: serde_json::Value) -> serde_json::Value {
        let response = self
            .post_authenticated("/employee", token)
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Failed to parse response")
    }
}

pub fn employee_json(email: &str) -> serde_json::Value {
    json!({
        "firstName": "Jane",
        "lastName": "Doe",
        "email": email,
        "address": "1 Main St"
    })
}
