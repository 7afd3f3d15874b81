use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::error::FailureKind;
use crate::models::{ElectronicItem, ParentRecord};
use crate::registry::{list_categories, Category};
use crate::services::item_collector::CategoryItems;
use crate::status::{normalize_status, NormalizedStatus};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    #[serde(rename = "categoryKey")]
    pub category: Category,
    pub label: &'static str,
    pub count: usize,
    pub items: Vec<ElectronicItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureKind>,
}

/// Parent record plus its items, one entry per registry category
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateView {
    pub parent: ParentRecord,
    pub status: NormalizedStatus,
    /// `parent.created_at` when the backend sent a recognizable timestamp
    pub created_at: Option<DateTime<FixedOffset>>,
    pub categories: Vec<CategorySummary>,
    pub total_items: usize,
    pub has_any_items: bool,
}

impl AggregateView {
    pub fn category(&self, category: Category) -> Option<&CategorySummary> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// Categories whose request failed, as opposed to legitimately empty ones
    pub fn failed_categories(&self) -> Vec<Category> {
        self.categories
            .iter()
            .filter(|c| c.failure.is_some())
            .map(|c| c.category)
            .collect()
    }

    pub fn items(&self) -> impl Iterator<Item = &ElectronicItem> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }
}

/// Merge per-category results in registry order; categories absent from `items` count as empty
pub fn aggregate(parent: &ParentRecord, mut items: CategoryItems) -> AggregateView {
    let categories: Vec<CategorySummary> = list_categories()
        .iter()
        .map(|descriptor| {
            let result = items.remove(&descriptor.category).unwrap_or_default();
            CategorySummary {
                category: descriptor.category,
                label: descriptor.display_label,
                count: result.items.len(),
                items: result.items,
                failure: result.failure,
            }
        })
        .collect();

    let total_items: usize = categories.iter().map(|c| c.count).sum();

    AggregateView {
        parent: parent.clone(),
        status: normalize_status(parent.status.as_deref()),
        created_at: parent.created_at_parsed(),
        categories,
        total_items,
        has_any_items: total_items > 0,
    }
}
