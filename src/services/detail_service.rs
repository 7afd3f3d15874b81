use std::sync::Arc;

use serde::Serialize;

use crate::config::Config;
use crate::error::AppResult;
use crate::http_client::{Backend, HttpBackend};
use crate::models::{ElectronicItem, ItemImageRef, ParentType, Session};
use crate::registry::Category;
use crate::services::aggregator::{aggregate, AggregateView};
use crate::services::image_resolver::ImageResolver;
use crate::services::item_collector::ItemCollector;
use crate::services::record_fetcher::{OwnerRef, RecordFetcher};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView {
    pub parent_type: ParentType,
    pub parent_type_label: &'static str,
    pub owner: OwnerRef,
    #[serde(flatten)]
    pub aggregate: AggregateView,
}

/// Entry point for detail views of donations, solicitations and disposals
pub struct DetailService {
    fetcher: RecordFetcher,
    collector: ItemCollector,
    images: ImageResolver,
}

impl DetailService {
    pub fn new(backend: Arc<dyn Backend>, media_base_url: &str) -> Self {
        Self {
            fetcher: RecordFetcher::new(Arc::clone(&backend)),
            collector: ItemCollector::new(Arc::clone(&backend)),
            images: ImageResolver::new(backend, media_base_url),
        }
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        let backend = HttpBackend::new(config)?;
        Ok(Self::new(Arc::new(backend), &config.media_base_url))
    }

    /// Load the parent record and every category's items; `None` renders as "no details found"
    pub async fn open_detail(
        &self,
        session: &Session,
        parent_type: ParentType,
        parent_id: &str,
    ) -> Option<DetailView> {
        tracing::info!(
            "Opening {} {} for account {} ({:?})",
            parent_type,
            parent_id,
            session.account_id,
            session.account_type
        );

        let parent = self
            .fetcher
            .fetch_parent(session, parent_type, parent_id)
            .await?;

        let items = self
            .collector
            .fetch_items_for_record(parent_type, parent_id)
            .await;
        let aggregate = aggregate(&parent, items);

        let failed = aggregate.failed_categories();
        if !failed.is_empty() {
            tracing::warn!(
                "{} {}: {} categor(ies) unavailable: {:?}",
                parent_type,
                parent_id,
                failed.len(),
                failed
            );
        }
        tracing::info!(
            "{} {}: {} item(s), status={:?}",
            parent_type,
            parent_id,
            aggregate.total_items,
            aggregate.status.value
        );

        let owner = RecordFetcher::resolve_owner(session, &parent);

        Some(DetailView {
            parent_type,
            parent_type_label: parent_type.label(),
            owner,
            aggregate,
        })
    }

    /// Lazy per-item image lookup, used when a single item is opened
    pub async fn resolve_item_image(&self, item: &ElectronicItem) -> ItemImageRef {
        self.images.resolve_item_image(item).await
    }

    pub async fn resolve_image(&self, category: Category, item_id: &str) -> Option<String> {
        self.images.resolve_image(category, item_id).await
    }
}
