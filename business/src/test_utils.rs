//! Mock API server helpers for page tests.
//!
//! ```ignore
//! let ctx = TestContext::new(Role::Admin).await;
//! ctx.mock_list("/api/customers", json!([sample_customer("c-1", "Budi", "pending")])).await;
//!
//! let mut page = CustomersPage::new(ctx.client());
//! page.list_mut().ensure_loaded();
//! page.settle().await;
//! ```

use std::time::Duration;

use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

use crate::{ApiClient, BusinessConfig, Role, Session, SessionUser};

pub const TEST_TOKEN: &str = "test_token";

pub struct TestContext {
    pub mock_server: MockServer,
    pub session: Session,
}

impl TestContext {
    pub async fn new(role: Role) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;
        let session = Session::new(
            SessionUser {
                id: "u-1".to_owned(),
                name: "Rina".to_owned(),
                role,
            },
            TEST_TOKEN,
        );
        Self {
            mock_server,
            session,
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(BusinessConfig::new(self.mock_server.uri()), self.session.clone())
    }

    /// Serves `data` enveloped on `GET {route}`, once per request.
    pub async fn mock_list(&self, route: &str, data: Value) {
        self.mock_list_delayed(route, data, Duration::ZERO).await;
    }

    pub async fn mock_list_delayed(&self, route: &str, data: Value, delay: Duration) {
        Mock::given(method("GET"))
            .and(path(route))
            .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "data": data }))
                    .set_delay(delay),
            )
            .mount(&self.mock_server)
            .await;
    }

    /// Like [`mock_list`](Self::mock_list) but only answers the first
    /// request, so a later mount can answer the next one.
    pub async fn mock_list_once(&self, route: &str, data: Value, delay: Duration) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "data": data }))
                    .set_delay(delay),
            )
            .up_to_n_times(1)
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_error(&self, http_method: &str, route: &str, status: u16, message: &str) {
        Mock::given(method(http_method))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "message": message })))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_post(&self, route: &str, data: Value) {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": data })))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn received_count(&self) -> usize {
        self.mock_server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}

pub fn sample_customer(id: &str, name: &str, status: &str) -> Value {
    json!({
        "id": id,
        "customer_number": format!("NL-{id}"),
        "name": name,
        "phone": "081234567890",
        "address": "Jl. Merdeka 1",
        "region_name": "Bandung",
        "package_name": "Home 30",
        "status": status,
        "registered_at": "2026-10-01T03:00:00Z"
    })
}
