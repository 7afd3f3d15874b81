pub mod config;
pub mod error;
pub mod http_client;
pub mod models;
pub mod registry;
pub mod services;
pub mod status;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use error::{AppError, AppResult, FailureKind, FetchError};
pub use registry::{list_categories, Category, CategoryDescriptor};
pub use status::{normalize_status, NormalizedStatus, RecordStatus};
