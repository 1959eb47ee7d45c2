//! PlayStation Store modules for HTTP fetching, parsing, and data models.

pub mod catalog;
pub mod client;
pub mod error;
pub mod models;
pub mod parser;
pub mod payload;
pub mod regions;
pub mod selectors;
pub mod urls;

pub use catalog::{list_games, list_games_in, retrieve_game, retrieve_game_in};
pub use client::{StoreClient, StoreFetch};
pub use error::StoreError;
pub use models::{Edition, ListingEntry, ListingPage, ProductDetail};
pub use parser::Parser;
pub use regions::Region;
