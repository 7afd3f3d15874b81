use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{FailureKind, FetchError};
use crate::http_client::{segment, Backend};
use crate::models::{ElectronicItem, ParentType, RawItem};
use crate::registry::{list_categories, Category, CategoryDescriptor};
use crate::services::scatter_gather::{scatter_gather, BranchError};

/// Items of one category under one parent record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryResult {
    pub items: Vec<ElectronicItem>,
    /// Set when the category request did not succeed; `items` is then empty
    pub failure: Option<FailureKind>,
}

/// Every registry category mapped to its result; iteration follows registry order
pub type CategoryItems = BTreeMap<Category, CategoryResult>;

/// Collects the items of a parent record across every category collection
pub struct ItemCollector {
    backend: Arc<dyn Backend>,
}

impl ItemCollector {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    pub fn list_path(
        parent_type: ParentType,
        parent_id: &str,
        descriptor: &CategoryDescriptor,
    ) -> String {
        format!(
            "/{}/{}/{}",
            parent_type.segment(),
            segment(parent_id),
            descriptor.list_endpoint
        )
    }

    /// One request per category, all in flight together; returns once every one has settled
    pub async fn fetch_items_for_record(
        &self,
        parent_type: ParentType,
        parent_id: &str,
    ) -> CategoryItems {
        let descriptors: Vec<&'static CategoryDescriptor> = list_categories().iter().collect();

        let outcomes = scatter_gather(&descriptors, |descriptor| {
            let backend = Arc::clone(&self.backend);
            let path = Self::list_path(parent_type, parent_id, descriptor);
            async move {
                let payload = backend.get_json(&path).await?;
                parse_items(payload, descriptor.category)
            }
        })
        .await;

        outcomes
            .into_iter()
            .map(|(descriptor, outcome)| {
                let category = descriptor.category;
                let result = match outcome {
                    Ok(items) => {
                        tracing::debug!(
                            "{} {}: {} -> {} item(s)",
                            parent_type,
                            parent_id,
                            category,
                            items.len()
                        );
                        CategoryResult { items, failure: None }
                    }
                    Err(BranchError::Failed(e)) => {
                        tracing::warn!(
                            "{} {}: category {} unavailable: {}",
                            parent_type,
                            parent_id,
                            category,
                            e
                        );
                        CategoryResult {
                            items: Vec::new(),
                            failure: Some(e.kind()),
                        }
                    }
                    Err(BranchError::Aborted) => {
                        tracing::warn!(
                            "{} {}: category {} request aborted",
                            parent_type,
                            parent_id,
                            category
                        );
                        CategoryResult {
                            items: Vec::new(),
                            failure: Some(FailureKind::Aborted),
                        }
                    }
                };
                (category, result)
            })
            .collect()
    }
}

/// Entries that fail to parse are dropped; the category only fails when the payload
/// is not an array or when no entry of a non-empty array is usable
fn parse_items(payload: Value, category: Category) -> Result<Vec<ElectronicItem>, FetchError> {
    let entries: Vec<Value> = serde_json::from_value(payload)?;
    let total = entries.len();

    let mut items = Vec::with_capacity(total);
    let mut last_error = None;
    for entry in entries {
        match serde_json::from_value::<RawItem>(entry) {
            Ok(raw) => items.push(raw.into_item(category)),
            Err(e) => {
                tracing::warn!("Skipping malformed {} entry: {}", category, e);
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) if items.is_empty() => Err(e.into()),
        _ => Ok(items),
    }
}
