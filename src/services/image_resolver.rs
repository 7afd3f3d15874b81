use std::sync::Arc;

use serde_json::Value;

use crate::http_client::{segment, Backend};
use crate::models::{ElectronicItem, ItemImageRef};
use crate::registry::Category;

/// Field names the image endpoint uses for the stored path, in lookup order
const PATH_FIELDS: [&str; 2] = ["url", "caminho"];

/// Resolves display image URLs one item at a time
pub struct ImageResolver {
    backend: Arc<dyn Backend>,
    media_base_url: String,
}

impl ImageResolver {
    pub fn new(backend: Arc<dyn Backend>, media_base_url: &str) -> Self {
        Self {
            backend,
            media_base_url: media_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn image_path(category: Category, item_id: &str) -> String {
        format!("/imagens/{}/{}", category.image_endpoint(), segment(item_id))
    }

    /// Absolute image URL for the item, or `None` when the backend has nothing usable
    pub async fn resolve_image(&self, category: Category, item_id: &str) -> Option<String> {
        let payload = match self.backend.get_json(&Self::image_path(category, item_id)).await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::debug!("No image for {} {}: {}", category, item_id, e);
                return None;
            }
        };

        let Some(path) = extract_path(&payload) else {
            tracing::debug!("Image response for {} {} has no path", category, item_id);
            return None;
        };

        Some(self.to_media_url(path))
    }

    pub async fn resolve_item_image(&self, item: &ElectronicItem) -> ItemImageRef {
        ItemImageRef {
            item_id: item.id.clone(),
            category: item.category,
            url: self.resolve_image(item.category, &item.id).await,
        }
    }

    fn to_media_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let path = path.replace('\\', "/");
        if path.starts_with('/') {
            format!("{}{}", self.media_base_url, path)
        } else {
            format!("{}/{}", self.media_base_url, path)
        }
    }
}

/// Array responses use their first element; objects are used as-is
fn extract_path(payload: &Value) -> Option<&str> {
    let record = match payload {
        Value::Array(entries) => entries.first()?,
        other => other,
    };

    PATH_FIELDS
        .iter()
        .filter_map(|field| record.get(field).and_then(Value::as_str))
        .map(str::trim)
        .find(|path| !path.is_empty())
}
