pub mod api;
pub mod config;
pub mod http;
pub mod pages;
pub mod route;
pub mod session;
pub mod table;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_utils;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;

pub use api::{ApiClient, ApiError, ApiResult};
pub use config::{BusinessConfig, ConfigError};
pub use pages::{CustomersPage, FetchStatus, ListPage, PageEvent, Resource};
pub use route::Route;
pub use session::{Permission, Role, Session, SessionUser};
pub use table::{DataTable, TableAction, TableView};
