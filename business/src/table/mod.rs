//! Generic client-side data table: search, sort and paginate an in-memory
//! list through declarative column descriptors.
//!
//! The table does no I/O and never mutates the rows it is given. Pages feed
//! it with [`DataTable::replace_rows`] after each fetch and drive it with
//! [`TableAction`]s coming from the UI controls.

mod column;
mod pagination;
mod row;
mod state;
mod value;

pub use column::{Cell, Column, RenderFn, Tone};
pub use pagination::{
    DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, PAGE_WINDOW, clamp_page, page_bounds, page_window,
    total_pages,
};
pub use row::{Record, TableRow, record};
pub use state::{DataTable, SortDirection, TableAction, TableOptions, TableView, ViewState};
pub use value::CellValue;
