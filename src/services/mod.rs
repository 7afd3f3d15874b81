pub mod aggregator;
pub mod detail_service;
pub mod image_resolver;
pub mod item_collector;
pub mod record_fetcher;
pub mod scatter_gather;

pub use aggregator::{aggregate, AggregateView, CategorySummary};
pub use detail_service::{DetailService, DetailView};
pub use image_resolver::ImageResolver;
pub use item_collector::{CategoryItems, CategoryResult, ItemCollector};
pub use record_fetcher::{OwnerRef, RecordFetcher};
pub use scatter_gather::{scatter_gather, BranchError};
