//! Menu entries offered to customers.
//!
//! Catalog items are written once (seeded at startup or inserted explicitly) and never
//! updated or deleted, so the only payload besides the record itself is
//! [`CatalogItemCreate`].
//!
//! See [`impl ActorEntity for CatalogItem`](crate::catalog_actor) for the store hooks.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for catalog items. Serialized as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogItemId(pub u32);

impl From<u32> for CatalogItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl CatalogItemId {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Display for CatalogItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "menu_item_{}", self.0)
    }
}

/// The fixed set of menu sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Appetizers,
    Pasta,
    Pizza,
    Desserts,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Appetizers,
        Category::Pasta,
        Category::Pizza,
        Category::Desserts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Appetizers => "appetizers",
            Category::Pasta => "pasta",
            Category::Pizza => "pizza",
            Category::Desserts => "desserts",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A single menu entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogItem {
    pub id: CatalogItemId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Category,
    pub image: String,
}

/// Payload for inserting a catalog item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogItemCreate {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Category,
    pub image: String,
}

impl CatalogItemCreate {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        category: Category,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            category,
            image: image.into(),
        }
    }
}
