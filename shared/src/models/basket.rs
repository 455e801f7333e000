//! Basket Model
//!
//! The user's current order: sub-products plus quantities, keyed by a
//! basket-entry id. Supplied by the surrounding application state.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric field as sent by the web client (number or numeric text)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Int(i64),
    Float(f64),
    Text(String),
    /// null, bool, array or object; reads as zero
    Other(serde_json::Value),
}

impl Default for Numeric {
    fn default() -> Self {
        Self::Int(0)
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Numeric {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

/// Sub-product that can be put in the basket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Unit price (whole currency units)
    #[serde(default)]
    pub price: Numeric,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
}

/// One line of the order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasketEntry {
    pub item: Item,
    #[serde(default)]
    pub count: Numeric,
}

/// Basket-entry id -> entry
pub type Order = BTreeMap<String, BasketEntry>;
