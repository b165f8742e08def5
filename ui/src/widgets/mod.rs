pub mod data_table;
mod env_version;
pub mod toasts;

pub use data_table::{DataTableOutput, DataTableWidget, data_table};
pub use env_version::env_version;
pub use toasts::{Toast, ToastLevel, Toasts};
