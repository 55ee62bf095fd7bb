use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four listing collections. Each kind owns one table; slugs must be
/// unique across all of them combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Hauling,
    Materials,
    Properties,
    Equipment,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] =
        [EntityKind::Hauling, EntityKind::Materials, EntityKind::Properties, EntityKind::Equipment];

    pub fn table(self) -> &'static str {
        match self {
            EntityKind::Hauling => "hauling",
            EntityKind::Materials => "materials",
            EntityKind::Properties => "properties",
            EntityKind::Equipment => "equipment",
        }
    }

    /// Human-readable singular, used in 404 messages.
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Hauling => "Hauling entry",
            EntityKind::Materials => "Materials entry",
            EntityKind::Properties => "Properties entry",
            EntityKind::Equipment => "Equipment entry",
        }
    }
}

/// Stored shape shared by the hauling, properties and equipment collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingEntry {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub url_end: String,
    pub is_active: bool,
    pub image_url: String,
}

/// One type/price pair on a materials listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeAndPrice {
    #[serde(rename = "type")]
    pub type_name: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialsEntry {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub types_and_prices: Vec<TypeAndPrice>,
    pub listing_websites: Vec<String>,
    pub url_end: String,
    pub is_active: bool,
}

/// POST/PUT body for hauling, properties and equipment. Every field except
/// `name` may be omitted; omitted fields fall back to the configured listing
/// defaults (full-document semantics, no field-level patching).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingUpsert {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub url_end: Option<String>,
    pub is_active: Option<bool>,
    pub image_url: Option<String>,
}

/// POST/PUT body for materials listings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialsUpsert {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub types_and_prices: Option<Vec<TypeAndPrice>>,
    pub listing_websites: Option<Vec<String>>,
    pub url_end: Option<String>,
    pub is_active: Option<bool>,
}

/// Query parameters selecting a single entity: `?_id=<uuid>` or
/// `?urlEnd=<slug>`. `_id` wins when both are present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectQuery {
    #[serde(rename = "_id")]
    pub id: Option<Uuid>,
    pub url_end: Option<String>,
}
