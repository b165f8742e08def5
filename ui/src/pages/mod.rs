//! One renderer per route.
//!
//! - `list_page`: any [`ListPage`](backoffice_business::ListPage), with an
//!   optional filter bar
//! - `customers_page`: the customer list plus the verify action

mod customers_page;
mod list_page;

pub use customers_page::customers_page;
pub use list_page::{invoices_page, list_page, page_header, visits_page};
