//! HTML parser for store browse pages and concept pages.

use crate::store::error::StoreError;
use crate::store::models::{Edition, ListingEntry, ProductDetail};
use crate::store::payload::{self, PriceMeta};
use crate::store::selectors::{detail, listing};
use crate::store::urls::{self, STORE_ORIGIN};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace, warn};

/// Parser for store HTML pages. Holds no state beyond the origin used to
/// resolve relative links.
pub struct Parser {
    origin: String,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Creates a parser resolving links against the public store origin.
    pub fn new() -> Self {
        Self::with_origin(STORE_ORIGIN)
    }

    /// Creates a parser resolving links against a custom origin.
    pub fn with_origin(origin: impl Into<String>) -> Self {
        Self { origin: origin.into().trim_end_matches('/').to_string() }
    }

    /// Parses a browse page into its entries and the last page number.
    pub fn parse_listing(&self, html: &str) -> Result<(Vec<ListingEntry>, u32), StoreError> {
        let document = Html::parse_document(html);

        let last_page = self.parse_last_page(&document)?;

        let mut entries = Vec::new();
        for card in document.select(&listing::CARD) {
            match self.parse_card(card) {
                Some(entry) => {
                    trace!("Parsed entry: {} - {}", entry.id, entry.title);
                    entries.push(entry);
                }
                None => warn!("Skipping catalog card without a product link"),
            }
        }

        debug!("Parsed {} entries (last page: {})", entries.len(), last_page);

        Ok((entries, last_page))
    }

    /// Parses the concept page of `concept_id`. Missing fields come back as
    /// `None`.
    ///
    /// Only genres fall back to the embedded data block, and only to the
    /// entry keyed by `concept_id`.
    pub fn parse_detail(&self, html: &str, concept_id: &str) -> ProductDetail {
        let document = Html::parse_document(html);

        let title = select_text(&document, &detail::TITLE);
        let platforms = select_text(&document, &detail::PLATFORMS);
        let release_date = select_text(&document, &detail::RELEASE_DATE);
        let publisher = select_text(&document, &detail::PUBLISHER);
        let genres = select_text(&document, &detail::GENRES)
            .or_else(|| self.parse_embedded_genres(&document, concept_id));

        let editions = self.parse_editions(&document);

        debug!(
            "Parsed detail '{}' with {} editions",
            title.as_deref().unwrap_or("<untitled>"),
            editions.len()
        );

        ProductDetail {
            title,
            platforms,
            release_date,
            publisher,
            genres: genres.unwrap_or_default(),
            editions,
        }
    }

    /// Reads the last page indicator of the pagination control.
    fn parse_last_page(&self, document: &Html) -> Result<u32, StoreError> {
        let pagination = document
            .select(&listing::PAGINATION)
            .next()
            .ok_or(StoreError::MissingElement("pagination control"))?;

        let text = pagination
            .select(&listing::PAGE_INDICATOR)
            .last()
            .map(element_text)
            .ok_or(StoreError::MissingElement("page indicator"))?;

        match text.parse::<u32>() {
            Ok(last_page) if last_page >= 1 => Ok(last_page),
            _ => Err(StoreError::InvalidPageCount(text)),
        }
    }

    /// Parses a single catalog card.
    fn parse_card(&self, card: ElementRef) -> Option<ListingEntry> {
        let href = card.select(&listing::LINK).next()?.value().attr("href")?;
        let page_url = self.absolute_url(href);

        let id = urls::last_path_segment(&page_url).to_string();

        let title = card.select(&listing::NAME).next().map(element_text).unwrap_or_default();

        let image_url = card
            .select(&listing::IMAGE)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(|src| urls::strip_query(src).to_string())
            .unwrap_or_default();

        Some(ListingEntry { id, title, image_url, page_url })
    }

    /// Collects purchasable editions in document order.
    fn parse_editions(&self, document: &Html) -> Vec<Edition> {
        let mut editions = Vec::new();

        for (index, card) in document.select(&detail::EDITION_CARD).enumerate() {
            let Some(price) = self.add_to_cart_price(card, index) else {
                continue;
            };

            let title = card.select(&detail::EDITION_NAME).next().map(element_text).unwrap_or_default();

            editions.push(Edition {
                title,
                original_price: price.original_price_value,
                discount_price: price.discount_price_value,
                currency: price.price_currency_code,
            });
        }

        editions
    }

    /// Price of the first call to action in `card` whose payload declares the
    /// add-to-cart subtype. Other CTAs in the same card are passed over.
    fn add_to_cart_price(&self, card: ElementRef, index: usize) -> Option<PriceMeta> {
        for cta in card.select(&detail::ADD_TO_CART) {
            let Some(raw) = cta.value().attr(detail::TELEMETRY_ATTR) else {
                continue;
            };

            let meta = match payload::parse_telemetry(raw) {
                Ok(meta) => meta,
                Err(e) => {
                    warn!("Edition card {}: malformed telemetry payload: {}", index, e);
                    continue;
                }
            };

            if meta.cta_sub_type.as_deref() != Some(detail::ADD_TO_CART_SUBTYPE) {
                trace!("Article {} CTA is {:?}, passing over", index, meta.cta_sub_type);
                continue;
            }

            match meta.price() {
                Some(price) => return Some(price.clone()),
                None => warn!("Edition card {}: add-to-cart payload has no price detail", index),
            }
        }

        trace!("Article {} has no usable add-to-cart action, skipping", index);
        None
    }

    /// Joined genres of `product_id` from the embedded JSON blocks.
    fn parse_embedded_genres(&self, document: &Html, product_id: &str) -> Option<String> {
        for block in document.select(&detail::DATA_BLOCK) {
            let raw = block.text().collect::<String>();
            match payload::parse_embedded_genres(&raw, product_id) {
                Ok(Some(genres)) if !genres.is_empty() => return Some(genres.join(", ")),
                Ok(_) => continue,
                Err(e) => warn!("Ignoring malformed embedded data block: {}", e),
            }
        }
        None
    }

    /// Prefixes the origin onto root-relative links.
    fn absolute_url(&self, href: &str) -> String {
        if href.starts_with("http") {
            href.to_string()
        } else if href.starts_with('/') {
            format!("{}{}", self.origin, href)
        } else {
            format!("{}/{}", self.origin, href)
        }
    }
}

/// Trimmed text of the first match.
fn select_text(document: &Html, selector: &Selector) -> Option<String> {
    document.select(selector).next().map(element_text)
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
