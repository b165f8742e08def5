use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::api::customers::{CustomerFilter, CustomerStatus};
use crate::pages::{Customers, CustomersPage, Invoices, ListPage, Regions};
use crate::test_utils::{TestContext, sample_customer};
use crate::{FetchStatus, PageEvent, Role};

fn names(page: &ListPage<Customers>) -> Vec<String> {
    page.table().rows().iter().map(|c| c.name.clone()).collect()
}

#[tokio::test]
async fn test_fetch_on_mount_loads_rows() {
    let ctx = TestContext::new(Role::Admin).await;
    ctx.mock_list(
        "/api/customers",
        json!([
            sample_customer("c-1", "Budi", "pending"),
            sample_customer("c-2", "Ani", "active"),
        ]),
    )
    .await;

    let mut page = ListPage::<Customers>::new(ctx.client());
    assert_eq!(page.status(), &FetchStatus::Idle);
    assert!(page.ensure_loaded());
    assert!(page.status().is_loading());
    assert!(!page.ensure_loaded(), "mount only fetches once");

    let events = page.settle().await;
    assert_eq!(events, [PageEvent::Loaded { count: 2 }]);
    assert!(matches!(page.status(), FetchStatus::Loaded { .. }));
    assert_eq!(names(&page), ["Budi", "Ani"]);
    assert_eq!(page.table().view().summary(), "Showing 1 to 2 of 2 entries");
}

#[tokio::test]
async fn test_newest_filter_wins_over_slow_response() {
    let ctx = TestContext::new(Role::Admin).await;
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .and(query_param("status", "pending"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": [sample_customer("c-1", "Budi", "pending")]}))
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&ctx.mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .and(query_param("status", "active"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": [sample_customer("c-2", "Ani", "active")]})),
        )
        .mount(&ctx.mock_server)
        .await;

    let mut page = ListPage::<Customers>::new(ctx.client());
    let slow = page.set_filter(CustomerFilter {
        status: Some(CustomerStatus::Pending),
        region_id: None,
    });
    let fast = page.set_filter(CustomerFilter {
        status: Some(CustomerStatus::Active),
        region_id: None,
    });
    assert!(fast > slow);

    page.settle().await;
    assert_eq!(names(&page), ["Ani"]);

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert!(page.poll().is_empty(), "stale result must not produce events");
    assert_eq!(names(&page), ["Ani"]);
    assert_eq!(page.generation(), fast);
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_rows() {
    let ctx = TestContext::new(Role::Admin).await;
    ctx.mock_list_once(
        "/api/customers",
        json!([sample_customer("c-1", "Budi", "active")]),
        Duration::ZERO,
    )
    .await;
    ctx.mock_error("GET", "/api/customers", 500, "database unavailable")
        .await;

    let mut page = ListPage::<Customers>::new(ctx.client());
    page.ensure_loaded();
    page.settle().await;
    assert_eq!(names(&page), ["Budi"]);

    page.refresh();
    let events = page.settle().await;
    let [PageEvent::Failed(message)] = events.as_slice() else {
        panic!("expected one failure, got {events:?}");
    };
    assert!(message.starts_with("Failed to load customers"), "{message}");
    assert!(message.contains("database unavailable"), "{message}");
    assert!(matches!(page.status(), FetchStatus::Failed(_)));
    assert_eq!(names(&page), ["Budi"]);
}

#[tokio::test]
async fn test_page_without_permission_does_not_fetch() {
    let ctx = TestContext::new(Role::Technician).await;
    let mut page = ListPage::<Invoices>::new(ctx.client());
    assert!(!page.can_view());
    page.ensure_loaded();
    assert_eq!(page.status(), &FetchStatus::Failed("Not allowed".to_owned()));
    assert_eq!(ctx.received_count().await, 0);
}

#[tokio::test]
async fn test_master_data_page_loads() {
    let ctx = TestContext::new(Role::Admin).await;
    ctx.mock_list(
        "/api/regions",
        json!([
            {"id": "r-1", "code": "BDG", "name": "Bandung", "unit_count": 3, "customer_count": 1200},
            {"id": "r-2", "code": "CMH", "name": "Cimahi", "unit_count": 1, "customer_count": 340},
        ]),
    )
    .await;

    let mut page = ListPage::<Regions>::new(ctx.client());
    page.ensure_loaded();
    page.settle().await;
    page.table_mut().toggle_sort("customer_count");
    let codes: Vec<&str> = page.table().view().rows.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, ["CMH", "BDG"]);
}

mod verify_tests {
    use super::*;

    async fn loaded_page(ctx: &TestContext) -> CustomersPage {
        ctx.mock_list(
            "/api/customers",
            json!([
                sample_customer("c-1", "Budi", "pending"),
                sample_customer("c-2", "Ani", "active"),
            ]),
        )
        .await;
        let mut page = CustomersPage::new(ctx.client());
        page.list_mut().ensure_loaded();
        page.settle().await;
        page
    }

    fn status_of(page: &CustomersPage, id: &str) -> CustomerStatus {
        let table = page.list().table();
        let index = table.position(|c| c.id == id).unwrap();
        table.rows()[index].status
    }

    #[tokio::test]
    async fn test_verify_applies_server_row() {
        let ctx = TestContext::new(Role::CustomerService).await;
        let mut page = loaded_page(&ctx).await;
        let mut verified = sample_customer("c-1", "Budi", "verified");
        verified["verified_at"] = json!("2026-10-19T02:00:00Z");
        ctx.mock_post("/api/customers/c-1/verify", verified).await;

        assert!(page.verify("c-1"));
        assert_eq!(status_of(&page, "c-1"), CustomerStatus::Verified);
        assert!(page.is_pending("c-1"));
        assert!(!page.verify("c-1"), "already in flight");

        let events = page.settle().await;
        assert_eq!(events, [PageEvent::ActionSucceeded("Budi verified".to_owned())]);
        assert!(!page.is_pending("c-1"));
        let table = page.list().table();
        let row = &table.rows()[table.position(|c| c.id == "c-1").unwrap()];
        assert_eq!(
            row.verified_at.map(|t| t.to_rfc3339()),
            Some("2026-10-19T02:00:00+00:00".to_owned())
        );
    }

    #[tokio::test]
    async fn test_rejected_verify_reverts_row() {
        let ctx = TestContext::new(Role::Admin).await;
        let mut page = loaded_page(&ctx).await;
        ctx.mock_error("POST", "/api/customers/c-1/verify", 422, "NIK tidak valid")
            .await;

        assert!(page.verify("c-1"));
        assert_eq!(status_of(&page, "c-1"), CustomerStatus::Verified);

        let events = page.settle().await;
        let [PageEvent::ActionFailed(message)] = events.as_slice() else {
            panic!("expected one failure, got {events:?}");
        };
        assert!(message.contains("Budi"), "{message}");
        assert!(message.contains("NIK tidak valid"), "{message}");
        assert_eq!(status_of(&page, "c-1"), CustomerStatus::Pending);
        let table = page.list().table();
        assert!(table.rows()[0].verified_at.is_none());
    }

    #[tokio::test]
    async fn test_verify_skips_verified_and_unknown_customers() {
        let ctx = TestContext::new(Role::Admin).await;
        let mut page = loaded_page(&ctx).await;
        assert!(!page.verify("c-2"));
        assert!(!page.verify("c-404"));
        assert_eq!(ctx.received_count().await, 1);
    }

    #[tokio::test]
    async fn test_finance_cannot_verify() {
        let ctx = TestContext::new(Role::Finance).await;
        let mut page = loaded_page(&ctx).await;
        assert!(!page.can_verify());
        assert!(!page.verify("c-1"));
        assert_eq!(status_of(&page, "c-1"), CustomerStatus::Pending);
    }
}
