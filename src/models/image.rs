use serde::Serialize;

use crate::registry::Category;

/// Display image of one item, resolved on demand; `url` is absent when nothing usable came back
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemImageRef {
    pub item_id: String,
    #[serde(rename = "categoryKey")]
    pub category: Category,
    pub url: Option<String>,
}
