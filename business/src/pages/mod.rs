//! Page state: a data table fed by a REST list endpoint.
//!
//! Pages fetch asynchronously and hand results back to the UI thread through
//! a flume channel; the UI calls `poll` every frame to apply them. Only the
//! newest fetch of a page is ever applied.

mod customers;
mod list_page;
mod resources;

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::api::{ApiClient, ApiResult};
use crate::route::Route;
use crate::session::Permission;
use crate::table::{Column, TableOptions, TableRow};

pub use customers::CustomersPage;
pub use list_page::{ListPage, Notify};
pub use resources::{
    Customers, Invoices, Packages, Regions, Revenue, Technicians, Units, Visits, customer_status_tone,
    invoice_status_tone, visit_status_tone,
};

/// A REST list endpoint plus the columns used to show it.
pub trait Resource: 'static {
    type Item: TableRow + Clone + Send + 'static;
    type Filter: Clone + Default + Send + 'static;

    const ROUTE: Route;
    /// API path, relative to the API url.
    const ENDPOINT: &'static str;

    fn columns() -> Vec<Column<Self::Item>>;

    fn fetch(
        client: ApiClient,
        filter: Self::Filter,
    ) -> impl Future<Output = ApiResult<Vec<Self::Item>>> + Send + 'static;

    fn title() -> &'static str {
        Self::ROUTE.title()
    }

    fn permission() -> Permission {
        Self::ROUTE.permission()
    }

    fn default_filter() -> Self::Filter {
        Self::Filter::default()
    }

    fn table_options() -> TableOptions {
        TableOptions::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Loaded {
        at: DateTime<Utc>,
    },
    Failed(String),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Something the UI should tell the user about, usually as a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Loaded { count: usize },
    Failed(String),
    ActionSucceeded(String),
    ActionFailed(String),
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn spawn<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            handle.spawn(future);
        }
        Err(err) => log::error!("No async runtime to run request on: {err}"),
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn spawn<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}
