//! Order review screen controller
//!
//! Owns the option store and the in-memory options for one selected item.
//! Interactions only touch memory; the two ways off the screen decide what
//! gets persisted:
//!
//! - editing products keeps the current options for when the user returns
//! - checkout resets them so the next order starts from defaults

use serde::{Deserialize, Serialize};
use shared::error::ReviewResult;
use shared::models::{Area, Catalog, MenuItem, Order, OrderOptions};

use crate::basket::{self, BasketReview};
use crate::details::OrderDetails;
use crate::options::OrderOptionStore;
use crate::price::DEFAULT_SEPARATOR;
use crate::store::KeyValueStore;

/// Where the screen sends the user next
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Navigation {
    /// Back to the item page to change products
    EditProducts { area_id: String, item_id: String },
    /// On to payment
    Checkout { area_id: String, item_id: String },
    /// Profile / delivery point settings
    EditProfile,
    /// Back to the start page
    Home,
}

impl Navigation {
    pub fn route(&self) -> String {
        match self {
            Self::EditProducts { area_id, item_id } => format!("/place/{area_id}/{item_id}"),
            Self::Checkout { area_id, item_id } => format!("/order/{area_id}/{item_id}"),
            Self::EditProfile => "/edit".to_string(),
            Self::Home => "/".to_string(),
        }
    }
}

/// Review screen for one selected menu item
#[derive(Debug)]
pub struct ReviewScreen<S> {
    options: OrderOptionStore<S>,
    details: OrderDetails,
    area: Area,
    item: MenuItem,
    separator: char,
}

impl<S: KeyValueStore> ReviewScreen<S> {
    /// Resolve the selected item and load stored options into memory
    pub fn mount(
        options: OrderOptionStore<S>,
        catalog: &Catalog,
        area_id: &str,
        item_id: &str,
    ) -> ReviewResult<Self> {
        let (area, item) = catalog.find_item(area_id, item_id)?;
        let details = options.load_details();

        tracing::debug!(area_id = %area_id, item_id = %item_id, ?details, "Review screen mounted");

        Ok(Self {
            options,
            details,
            area: area.clone(),
            item: item.clone(),
            separator: DEFAULT_SEPARATOR,
        })
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    // ========== Accessors ==========

    pub fn details(&self) -> &OrderDetails {
        &self.details
    }

    /// Current options in snapshot form
    pub fn options(&self) -> OrderOptions {
        self.details.to_options()
    }

    pub fn area(&self) -> &Area {
        &self.area
    }

    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    pub fn option_store(&self) -> &OrderOptionStore<S> {
        &self.options
    }

    pub fn into_option_store(self) -> OrderOptionStore<S> {
        self.options
    }

    /// Basket lines and total for the selected item
    pub fn review<'a>(&self, order: &'a Order) -> BasketReview<'a> {
        basket::compute_review_with(order, &self.item, self.separator)
    }

    // ========== Interactions ==========

    pub fn toggle_asap(&mut self) {
        self.details.toggle_asap();
    }

    pub fn focus_time(&mut self) {
        self.details.focus_time();
    }

    pub fn edit_time(&mut self, raw: &str) {
        self.details.edit_time(raw);
    }

    pub fn blur_time(&mut self) {
        self.details.blur_time();
    }

    pub fn toggle_takeaway(&mut self) {
        self.details.toggle_takeaway();
    }

    pub fn toggle_dine_in(&mut self) {
        self.details.toggle_dine_in();
    }

    // ========== Navigation ==========

    /// Keep the current options and go back to product selection
    pub fn edit_products(&mut self) -> ReviewResult<Navigation> {
        self.options.save_details(&self.details)?;
        let nav = Navigation::EditProducts {
            area_id: self.area.id.clone(),
            item_id: self.item.id.clone(),
        };
        tracing::info!(route = %nav.route(), "Leaving review to edit products");
        Ok(nav)
    }

    /// Clear stored options and go to payment
    pub fn checkout(&mut self) -> ReviewResult<Navigation> {
        self.options.reset()?;
        let nav = Navigation::Checkout {
            area_id: self.area.id.clone(),
            item_id: self.item.id.clone(),
        };
        tracing::info!(route = %nav.route(), "Leaving review for checkout");
        Ok(nav)
    }

    /// Nothing is persisted on this path
    pub fn edit_profile(&self) -> Navigation {
        Navigation::EditProfile
    }

    /// Header link; nothing is persisted either
    pub fn home(&self) -> Navigation {
        Navigation::Home
    }
}
