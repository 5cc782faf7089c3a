pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::http::router;
pub use crate::adapters::storage::{InMemoryStore, JsonFileStore};
pub use crate::config::{CliArgs, ServerConfig};
pub use crate::core::{aggregation::aggregate_stats, service::SubmissionService};
pub use crate::utils::error::{AppError, Result};
