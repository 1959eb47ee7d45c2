//! Data models for store listings and product details.

use serde::{Deserialize, Serialize};

/// A single catalog card from a browse page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    /// Trailing path segment of the product URL
    pub id: String,
    /// Display name shown on the card
    pub title: String,
    /// Cover image URL without query parameters
    pub image_url: String,
    /// Absolute product page URL
    pub page_url: String,
}

/// One browse page worth of entries plus pagination bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPage {
    /// Entries in storefront ranking order
    pub entries: Vec<ListingEntry>,
    /// Page that was requested
    pub current_page: u32,
    /// Last page reported by the pagination control
    pub last_page: u32,
}

impl ListingPage {
    /// Returns number of entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the page carried no catalog cards.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether another page follows this one.
    pub fn has_more(&self) -> bool {
        self.current_page < self.last_page
    }
}

/// A purchasable variant of a product.
///
/// Prices are kept exactly as the store formats them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edition {
    pub title: String,
    pub original_price: String,
    pub discount_price: String,
    pub currency: String,
}

impl Edition {
    /// Returns true when the store shows a reduced price.
    pub fn is_discounted(&self) -> bool {
        !self.discount_price.is_empty() && self.discount_price != self.original_price
    }
}

/// Attributes of a single concept page.
///
/// Scalar fields are `None` when the page has no node for them, which is
/// distinct from a node that is present but empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub title: Option<String>,
    pub platforms: Option<String>,
    pub release_date: Option<String>,
    pub publisher: Option<String>,
    /// Comma-joined genre names, empty when none were found
    pub genres: String,
    pub editions: Vec<Edition>,
}
