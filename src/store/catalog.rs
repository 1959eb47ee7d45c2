//! Listing and detail retrieval: build URL, fetch, extract.

use crate::store::client::StoreFetch;
use crate::store::error::StoreError;
use crate::store::models::{ListingPage, ProductDetail};
use crate::store::parser::Parser;
use crate::store::regions::Region;
use crate::store::urls;
use tracing::info;

/// Fetches one browse page for a region code such as `"en"` or `"en-tr"`.
///
/// The region is validated before anything is fetched.
pub async fn list_games(
    fetcher: &impl StoreFetch,
    region: &str,
    page: u32,
) -> Result<ListingPage, StoreError> {
    let region: Region = region.parse()?;
    list_games_in(fetcher, region, page).await
}

/// Fetches one concept page for a region code.
///
/// The region is validated before anything is fetched.
pub async fn retrieve_game(
    fetcher: &impl StoreFetch,
    concept_id: &str,
    region: &str,
) -> Result<ProductDetail, StoreError> {
    let region: Region = region.parse()?;
    retrieve_game_in(fetcher, concept_id, region).await
}

/// Typed-region variant of [`list_games`].
pub async fn list_games_in(
    fetcher: &impl StoreFetch,
    region: Region,
    page: u32,
) -> Result<ListingPage, StoreError> {
    let url = urls::listing_url_at(fetcher.origin(), region, page);
    info!("Listing {} page {}", region, page);

    let html = fetcher.fetch(&url).await?;
    let (entries, last_page) = Parser::new().parse_listing(&html)?;

    Ok(ListingPage { entries, current_page: page, last_page })
}

/// Typed-region variant of [`retrieve_game`].
pub async fn retrieve_game_in(
    fetcher: &impl StoreFetch,
    concept_id: &str,
    region: Region,
) -> Result<ProductDetail, StoreError> {
    let url = urls::detail_url_at(fetcher.origin(), concept_id, region);
    info!("Fetching concept {} ({})", concept_id, region);

    let html = fetcher.fetch(&url).await?;
    Ok(Parser::new().parse_detail(&html, concept_id))
}
