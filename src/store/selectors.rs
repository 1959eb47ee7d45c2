//! CSS selectors for PlayStation Store HTML parsing.
//!
//! Every class name and `data-*` attribute here is owned by the store's
//! markup. Update this file when the store changes its HTML structure.
//!
//! **Update process**: when parsing fails, capture an HTML sample, update
//! selectors, refresh the fixtures under `tests/fixtures/` and run the
//! fixture drift tests.

use scraper::Selector;
use std::sync::LazyLock;

/// Selectors for catalog browse pages.
pub mod listing {
    use super::*;

    /// Catalog card. The class contains `/` and `@`, so match it as a word.
    pub static CARD: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("li[class~='psw-l-w-1/2@mobile-s']").unwrap());

    /// Anchor to the product page inside a card.
    pub static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

    /// Product name inside a card.
    pub static NAME: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "#product-name, \
             [data-qa$='#product-name']",
        )
        .unwrap()
    });

    /// Cover image inside a card.
    pub static IMAGE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());

    /// Pagination control (ordered list of page indicators).
    pub static PAGINATION: LazyLock<Selector> = LazyLock::new(|| Selector::parse("ol").unwrap());

    /// Page indicator inside the pagination control.
    pub static PAGE_INDICATOR: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("span").unwrap());
}

/// Selectors for concept detail pages.
pub mod detail {
    use super::*;

    /// Game title heading.
    pub static TITLE: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "h1[data-qa='mfe-game-title#name'], \
             h1.title",
        )
        .unwrap()
    });

    /// Platform list in the release information block.
    pub static PLATFORMS: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse("[data-qa='gameInfo#releaseInformation#platform-value']").unwrap()
    });

    /// Release date in the release information block.
    pub static RELEASE_DATE: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse("[data-qa='gameInfo#releaseInformation#releaseDate-value']").unwrap()
    });

    /// Publisher in the release information block.
    pub static PUBLISHER: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse("[data-qa='gameInfo#releaseInformation#publisher-value']").unwrap()
    });

    /// Genres in the release information block.
    pub static GENRES: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse("[data-qa='gameInfo#releaseInformation#genre-value']").unwrap()
    });

    /// Edition card.
    pub static EDITION_CARD: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("article").unwrap());

    /// Attribute carrying the per-card telemetry payload.
    pub static TELEMETRY_ATTR: &str = "data-telemetry-meta";

    /// Candidate add-to-cart calls to action. A match only mentions
    /// `add_to_cart` somewhere in its payload; the parsed `ctaSubType` decides.
    pub static ADD_TO_CART: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("[data-telemetry-meta*='add_to_cart']").unwrap());

    /// CTA subtype value that marks a purchasable edition.
    pub static ADD_TO_CART_SUBTYPE: &str = "add_to_cart";

    /// Edition name heading inside a card.
    pub static EDITION_NAME: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(
            "[data-qa$='#editionName'], \
             h3",
        )
        .unwrap()
    });

    /// Embedded structured data blocks.
    pub static DATA_BLOCK: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("script[type='application/json']").unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_selectors_compile() {
        // Force evaluation of all lazy selectors to ensure they compile
        let _ = &*listing::CARD;
        let _ = &*listing::LINK;
        let _ = &*listing::NAME;
        let _ = &*listing::IMAGE;
        let _ = &*listing::PAGINATION;
        let _ = &*listing::PAGE_INDICATOR;
        let _ = &*detail::TITLE;
        let _ = &*detail::PLATFORMS;
        let _ = &*detail::RELEASE_DATE;
        let _ = &*detail::PUBLISHER;
        let _ = &*detail::GENRES;
        let _ = &*detail::EDITION_CARD;
        let _ = &*detail::ADD_TO_CART;
        let _ = &*detail::EDITION_NAME;
        let _ = &*detail::DATA_BLOCK;
    }

    #[test]
    fn test_card_class_word_match() {
        let html = Html::parse_document(
            r#"<ul>
                <li class="psw-l-w-1/2@mobile-s psw-l-w-1/3@tablet-l"><a href="/concept/1">x</a></li>
                <li class="psw-l-w-1/2@mobile-s-extra"><a href="/concept/2">y</a></li>
                <li class="other"><a href="/concept/3">z</a></li>
            </ul>"#,
        );

        let cards: Vec<_> = html.select(&listing::CARD).collect();
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn test_add_to_cart_marker() {
        let html = Html::parse_document(
            r#"<article>
                <button data-telemetry-meta='{"ctaSubType":"add_to_cart"}'>Add to Cart</button>
                <button data-telemetry-meta='{"ctaSubType":"add_to_wishlist"}'>Wishlist</button>
            </article>"#,
        );

        let ctas: Vec<_> = html.select(&detail::ADD_TO_CART).collect();
        assert_eq!(ctas.len(), 1);
        assert!(ctas[0].value().attr(detail::TELEMETRY_ATTR).unwrap().contains("add_to_cart"));
    }
}
