use serde::{Deserialize, Serialize};

use crate::registry::Category;

/// Item as listed by `GET /{parentType}/{id}/{listEndpoint}`; carries no category of its own
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    #[serde(deserialize_with = "super::de_id")]
    pub id: String,
    #[serde(default, alias = "nome", deserialize_with = "super::de_opt_text")]
    pub name: Option<String>,
    #[serde(default, alias = "modelo", deserialize_with = "super::de_opt_text")]
    pub model: Option<String>,
    #[serde(default, alias = "marca", deserialize_with = "super::de_opt_text")]
    pub brand: Option<String>,
    #[serde(default, alias = "numeroSerie", deserialize_with = "super::de_opt_text")]
    pub serial_number: Option<String>,
    #[serde(
        default,
        alias = "estado",
        alias = "condicao",
        deserialize_with = "super::de_opt_text"
    )]
    pub condition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectronicItem {
    pub id: String,
    #[serde(rename = "categoryKey")]
    pub category: Category,
    pub name: String,
    pub model: Option<String>,
    pub brand: Option<String>,
    pub serial_number: Option<String>,
    pub condition: Option<String>,
}

impl RawItem {
    /// Tag with the registry category it was listed under
    pub fn into_item(self, category: Category) -> ElectronicItem {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .or_else(|| {
                let parts: Vec<&str> = [self.brand.as_deref(), self.model.as_deref()]
                    .into_iter()
                    .flatten()
                    .collect();
                (!parts.is_empty()).then(|| parts.join(" "))
            })
            .unwrap_or_else(|| category.label().to_string());

        ElectronicItem {
            id: self.id,
            category,
            name,
            model: self.model,
            brand: self.brand,
            serial_number: self.serial_number,
            condition: self.condition,
        }
    }
}
