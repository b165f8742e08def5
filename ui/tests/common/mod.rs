#![allow(dead_code)]

use std::time::Duration;

use backoffice_business::{Role, Session, SessionUser};
use backoffice_ui::BackofficeApp;
use backoffice_ui::state::State;
use egui_kittest::Harness;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Time given to spawned requests to reach the mock server and back.
pub const NETWORK_WAIT: Duration = Duration::from_millis(250);

pub fn session(role: Role) -> Session {
    Session::new(
        SessionUser {
            id: "u-1".to_owned(),
            name: "Rina".to_owned(),
            role,
        },
        "test_token",
    )
}

pub struct TestCtx<'a> {
    /// Mock server must be retained to keep HTTP endpoints alive during tests.
    pub mock_server: MockServer,
    pub harness: Harness<'a, BackofficeApp>,
}

impl TestCtx<'_> {
    pub async fn new(session: Session) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;
        let state = State::test(mock_server.uri(), session);
        let harness = Harness::new_state(
            |ctx, app: &mut BackofficeApp| app.ui(ctx),
            BackofficeApp::new(state),
        );
        Self {
            mock_server,
            harness,
        }
    }

    pub async fn mock_list(&self, route: &str, data: Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": data })))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_status(&self, http_method: &str, route: &str, status: u16, message: &str) {
        Mock::given(method(http_method))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "message": message })))
            .mount(&self.mock_server)
            .await;
    }

    /// Steps once to start requests, lets them finish, then steps again to
    /// apply the results.
    pub async fn settle(&mut self) {
        self.harness.step();
        tokio::time::sleep(NETWORK_WAIT).await;
        for _ in 0..5 {
            self.harness.step();
        }
    }
}

pub fn customer(id: &str, name: &str, phone: &str, status: &str) -> Value {
    json!({
        "id": id,
        "customer_number": format!("NL-{id}"),
        "name": name,
        "phone": phone,
        "address": "Jl. Merdeka 1",
        "status": status,
        "registered_at": "2026-10-01T03:00:00Z"
    })
}

pub fn invoice(id: &str, customer_name: &str, amount: f64) -> Value {
    json!({
        "id": id,
        "invoice_number": format!("INV-{id}"),
        "customer_id": "c-1",
        "customer_name": customer_name,
        "period": "2026-10",
        "amount": amount,
        "due_date": "2026-10-20",
        "status": "unpaid"
    })
}
