//! gradebook-core — Student records, grading rules, and persistence.
//!
//! This crate defines the record model, the pure derivation rules that turn
//! marks into a percentage, grade, and status, and the `Store` that keeps
//! records in a JSON file and exports them as a CSV report.

pub mod config;
pub mod error;
pub mod export;
pub mod grading;
pub mod model;
pub mod store;

pub use config::StoreConfig;
pub use error::{GradebookError, Result};
pub use model::{Marks, Record, Subject};
pub use store::Store;
