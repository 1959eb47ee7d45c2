//! Game detail command implementation.

use crate::config::Config;
use crate::format::Formatter;
use crate::store::{catalog, ProductDetail, StoreClient, StoreFetch};
use anyhow::{Context, Result};
use tracing::info;

/// Retrieves product details by concept id.
pub struct GameCommand {
    config: Config,
}

impl GameCommand {
    /// Creates a new game command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches a concept and returns formatted output.
    pub async fn execute(&self, concept_id: &str) -> Result<String> {
        let client = StoreClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_client(&client, concept_id).await
    }

    /// Fetches a concept with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl StoreFetch,
        concept_id: &str,
    ) -> Result<String> {
        let concept_id = validate_concept_id(concept_id)?;

        info!("Looking up concept: {}", concept_id);

        let detail = catalog::retrieve_game_in(client, concept_id, self.config.region).await?;

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_detail(&detail))
    }

    /// Fetches several concepts one after another.
    pub async fn execute_batch(&self, concept_ids: &[String]) -> Result<String> {
        let client = StoreClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_batch_with_client(&client, concept_ids).await
    }

    /// Fetches several concepts with a provided client (for testing).
    ///
    /// Invalid ids and failed lookups are reported on stderr and skipped.
    pub async fn execute_batch_with_client(
        &self,
        client: &impl StoreFetch,
        concept_ids: &[String],
    ) -> Result<String> {
        let mut details: Vec<ProductDetail> = Vec::new();

        for concept_id in concept_ids {
            let concept_id = match validate_concept_id(concept_id) {
                Ok(id) => id,
                Err(e) => {
                    eprintln!("Skipping: {}", e);
                    continue;
                }
            };

            info!("Looking up concept: {}", concept_id);

            match catalog::retrieve_game_in(client, concept_id, self.config.region).await {
                Ok(detail) => details.push(detail),
                Err(e) => eprintln!("Failed to fetch {}: {}", concept_id, e),
            }
        }

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_details(&details))
    }
}

/// Concept ids are opaque but must be a single non-empty path segment.
fn validate_concept_id(concept_id: &str) -> Result<&str> {
    let concept_id = concept_id.trim();
    if concept_id.is_empty() || concept_id.contains('/') {
        anyhow::bail!("Invalid concept id: '{}'", concept_id);
    }
    Ok(concept_id)
}
