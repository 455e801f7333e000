//! Basket aggregation for the review screen
//!
//! Picks the order lines that belong to the selected menu item and totals
//! them. Pure: inputs are borrowed and never modified.

use std::collections::HashSet;

use serde::Serialize;
use shared::models::{BasketEntry, MenuItem, Order};

use crate::price::{self, DEFAULT_SEPARATOR};

/// One displayed basket line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewLine<'a> {
    pub entry_id: &'a str,
    pub entry: &'a BasketEntry,
    /// `price * count` as integers
    pub line_total: i64,
}

/// Lines and total for the selected item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasketReview<'a> {
    pub total: i64,
    pub formatted_total: String,
    pub entries: Vec<ReviewLine<'a>>,
}

impl BasketReview<'_> {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Review with the default thousands separator
pub fn compute_review<'a>(order: &'a Order, item: &MenuItem) -> BasketReview<'a> {
    compute_review_with(order, item, DEFAULT_SEPARATOR)
}

pub fn compute_review_with<'a>(
    order: &'a Order,
    item: &MenuItem,
    separator: char,
) -> BasketReview<'a> {
    let food_ids: HashSet<&str> = item.food_ids().collect();

    let entries: Vec<ReviewLine<'a>> = order
        .iter()
        .filter(|(_, entry)| food_ids.contains(entry.item.id.as_str()))
        .map(|(entry_id, entry)| ReviewLine {
            entry_id: entry_id.as_str(),
            entry,
            line_total: price::line_total(&entry.item.price, &entry.count),
        })
        .collect();

    let total = entries
        .iter()
        .fold(0i64, |acc, line| acc.saturating_add(line.line_total));

    tracing::debug!(
        item_id = %item.id,
        lines = entries.len(),
        total,
        "Basket review computed"
    );

    BasketReview {
        total,
        formatted_total: price::format_grouped(total, separator),
        entries,
    }
}
