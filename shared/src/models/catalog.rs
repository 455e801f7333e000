//! Catalog Model
//!
//! Areas (restaurants / vendors) and the menu items they offer, as supplied
//! by the surrounding application. Read-only to the review core.

use serde::{Deserialize, Serialize};

use crate::error::{ReviewError, ReviewResult};

/// Reference to a sub-product that may appear in an item's basket view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodRef {
    pub id: String,
}

/// Menu item under review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    /// Eligible sub-products (absent = none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foods: Option<Vec<FoodRef>>,
}

impl MenuItem {
    /// Ids of the sub-products eligible for this item
    pub fn food_ids(&self) -> impl Iterator<Item = &str> {
        self.foods
            .iter()
            .flatten()
            .map(|food| food.id.as_str())
    }
}

/// Restaurant / vendor grouping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl Area {
    pub fn item(&self, item_id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == item_id)
    }
}

/// Lookup of areas by id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub areas: Vec<Area>,
}

impl Catalog {
    pub fn new(areas: Vec<Area>) -> Self {
        Self { areas }
    }

    pub fn area(&self, area_id: &str) -> Option<&Area> {
        self.areas.iter().find(|area| area.id == area_id)
    }

    /// Resolve an area and one of its items, failing fast on unknown ids
    pub fn find_item(&self, area_id: &str, item_id: &str) -> ReviewResult<(&Area, &MenuItem)> {
        let area = self
            .area(area_id)
            .ok_or_else(|| ReviewError::AreaNotFound(area_id.to_string()))?;
        let item = area.item(item_id).ok_or_else(|| ReviewError::ItemNotFound {
            area_id: area_id.to_string(),
            item_id: item_id.to_string(),
        })?;
        Ok((area, item))
    }
}
