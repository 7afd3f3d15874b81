//! Equipment category registry
//!
//! Every category lives in its own backend collection. The segment used to
//! list items of a category under a parent record and the segment used to
//! fetch an item's image are spelled differently by the backend, so both are
//! kept here side by side.

use serde::{Deserialize, Serialize};

/// Supported equipment categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "teclados")]
    Keyboards,
    #[serde(rename = "mouses")]
    Mice,
    #[serde(rename = "monitores")]
    Monitors,
    #[serde(rename = "hds")]
    HardDrives,
    #[serde(rename = "fontes")]
    PowerSupplies,
    #[serde(rename = "placasMae")]
    Motherboards,
    #[serde(rename = "processadores")]
    Processors,
    #[serde(rename = "memoriasRam")]
    RamModules,
    #[serde(rename = "placasVideo")]
    GraphicsCards,
    #[serde(rename = "gabinetes")]
    Cases,
    #[serde(rename = "estabilizadores")]
    Stabilizers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDescriptor {
    pub category: Category,
    pub key: &'static str,
    pub list_endpoint: &'static str,
    pub image_endpoint: &'static str,
    pub display_label: &'static str,
}

const fn entry(
    category: Category,
    key: &'static str,
    list_endpoint: &'static str,
    image_endpoint: &'static str,
    display_label: &'static str,
) -> CategoryDescriptor {
    CategoryDescriptor {
        category,
        key,
        list_endpoint,
        image_endpoint,
        display_label,
    }
}

static CATEGORIES: [CategoryDescriptor; 11] = [
    entry(Category::Keyboards, "teclados", "teclados", "teclado", "Teclados"),
    entry(Category::Mice, "mouses", "mouses", "mouse", "Mouses"),
    entry(Category::Monitors, "monitores", "monitores", "monitor", "Monitores"),
    entry(Category::HardDrives, "hds", "hds", "hd", "HDs"),
    entry(Category::PowerSupplies, "fontes", "fontes", "fonte", "Fontes"),
    entry(Category::Motherboards, "placasMae", "placasMae", "placaMae", "Placas-mãe"),
    entry(Category::Processors, "processadores", "processadores", "processador", "Processadores"),
    entry(Category::RamModules, "memoriasRam", "memoriasRam", "memoriaRam", "Memórias RAM"),
    entry(Category::GraphicsCards, "placasVideo", "placasVideo", "placaVideo", "Placas de vídeo"),
    entry(Category::Cases, "gabinetes", "gabinetes", "gabinete", "Gabinetes"),
    entry(Category::Stabilizers, "estabilizadores", "estabilizadores", "estabilizador", "Estabilizadores"),
];

/// All categories in fixed display order
pub fn list_categories() -> &'static [CategoryDescriptor] {
    &CATEGORIES
}

impl Category {
    pub fn from_key(key: &str) -> Option<Self> {
        CATEGORIES
            .iter()
            .find(|d| d.key.eq_ignore_ascii_case(key))
            .map(|d| d.category)
    }

    pub fn descriptor(&self) -> &'static CategoryDescriptor {
        // CATEGORIES is declared in variant order
        &CATEGORIES[*self as usize]
    }

    pub fn key(&self) -> &'static str {
        self.descriptor().key
    }

    pub fn list_endpoint(&self) -> &'static str {
        self.descriptor().list_endpoint
    }

    pub fn image_endpoint(&self) -> &'static str {
        self.descriptor().image_endpoint
    }

    pub fn label(&self) -> &'static str {
        self.descriptor().display_label
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_descriptor_matches_variant() {
        for descriptor in list_categories() {
            assert_eq!(descriptor.category.descriptor(), descriptor);
            assert_eq!(Category::from_key(descriptor.key), Some(descriptor.category));
        }
    }

    #[test]
    fn test_keys_and_segments_are_unique() {
        let keys: HashSet<_> = list_categories().iter().map(|d| d.key).collect();
        let lists: HashSet<_> = list_categories().iter().map(|d| d.list_endpoint).collect();
        let images: HashSet<_> = list_categories().iter().map(|d| d.image_endpoint).collect();
        assert_eq!(keys.len(), 11);
        assert_eq!(lists.len(), 11);
        assert_eq!(images.len(), 11);
    }

    #[test]
    fn test_motherboard_segments_differ() {
        let mb = Category::from_key("placasMae").unwrap();
        assert_eq!(mb.list_endpoint(), "placasMae");
        assert_eq!(mb.image_endpoint(), "placaMae");
    }

    #[test]
    fn test_from_key_is_case_insensitive() {
        assert_eq!(Category::from_key("MONITORES"), Some(Category::Monitors));
        assert_eq!(Category::from_key("impressoras"), None);
    }

    #[test]
    fn test_serde_uses_registry_key() {
        let json = serde_json::to_string(&Category::Motherboards).unwrap();
        assert_eq!(json, "\"placasMae\"");
        for descriptor in list_categories() {
            let json = serde_json::to_value(descriptor.category).unwrap();
            assert_eq!(json, descriptor.key);
        }
    }
}
