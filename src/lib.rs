//! psstore-scraper - Stateless PlayStation Store catalog and product scraper
//!
//! Lists catalog browse pages and retrieves concept details (platforms,
//! release date, publisher, genres, editions and prices) by parsing the
//! store's rendered HTML.

pub mod commands;
pub mod config;
pub mod format;
pub mod store;

pub use config::Config;
pub use store::{
    list_games, retrieve_game, Edition, ListingEntry, ListingPage, ProductDetail, Region,
    StoreClient, StoreError, StoreFetch,
};
