//! Catalog listing command implementation.

use crate::config::Config;
use crate::format::Formatter;
use crate::store::{catalog, StoreClient, StoreFetch};
use anyhow::{Context, Result};
use tracing::{info, warn};

/// Lists one page of the store catalog.
pub struct ListCommand {
    config: Config,
}

impl ListCommand {
    /// Creates a new list command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches the page and returns formatted output.
    pub async fn execute(&self, page: u32) -> Result<String> {
        let client = StoreClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_client(&client, page).await
    }

    /// Fetches the page with a provided client (for testing).
    pub async fn execute_with_client(&self, client: &impl StoreFetch, page: u32) -> Result<String> {
        if page == 0 {
            anyhow::bail!("Invalid page number: 0. Pages start at 1.");
        }

        let listing = catalog::list_games_in(client, self.config.region, page).await?;

        if listing.current_page > listing.last_page {
            warn!(
                "Requested page {} is past the last page ({})",
                listing.current_page, listing.last_page
            );
        }

        info!("Found {} games on page {}", listing.count(), page);

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_listing(&listing))
    }
}
