mod dmc_app;
mod dmc_app_error;
pub mod run_ops;

pub use dmc_app::{DmcApp, DmcOperation};
pub use dmc_app_error::DmcAppError;
pub use run_ops::RunSummary;
