//! Fixture drift checks.
//!
//! Each structural marker the extractors rely on must still be present in the
//! captured pages. When the store changes its markup and the fixtures are
//! refreshed, these tests fail by name instead of the extractors silently
//! returning empty records.

use psstore_scraper::store::parser::Parser;
use psstore_scraper::store::selectors::{detail, listing};
use psstore_scraper::store::StoreError;
use scraper::{Html, Selector};

const LISTING_FIXTURE: &str = include_str!("fixtures/listing_page.html");
const DETAIL_FIXTURE: &str = include_str!("fixtures/detail_page.html");

fn assert_present(html: &str, selector: &Selector, name: &str) {
    let document = Html::parse_document(html);
    assert!(
        document.select(selector).next().is_some(),
        "marker '{}' no longer matches the fixture; update store::selectors",
        name
    );
}

#[test]
fn test_listing_markers_present() {
    assert_present(LISTING_FIXTURE, &listing::CARD, "listing::CARD");
    assert_present(LISTING_FIXTURE, &listing::LINK, "listing::LINK");
    assert_present(LISTING_FIXTURE, &listing::NAME, "listing::NAME");
    assert_present(LISTING_FIXTURE, &listing::IMAGE, "listing::IMAGE");
    assert_present(LISTING_FIXTURE, &listing::PAGINATION, "listing::PAGINATION");
    assert_present(LISTING_FIXTURE, &listing::PAGE_INDICATOR, "listing::PAGE_INDICATOR");
}

#[test]
fn test_detail_markers_present() {
    assert_present(DETAIL_FIXTURE, &detail::TITLE, "detail::TITLE");
    assert_present(DETAIL_FIXTURE, &detail::PLATFORMS, "detail::PLATFORMS");
    assert_present(DETAIL_FIXTURE, &detail::RELEASE_DATE, "detail::RELEASE_DATE");
    assert_present(DETAIL_FIXTURE, &detail::PUBLISHER, "detail::PUBLISHER");
    assert_present(DETAIL_FIXTURE, &detail::GENRES, "detail::GENRES");
    assert_present(DETAIL_FIXTURE, &detail::EDITION_CARD, "detail::EDITION_CARD");
    assert_present(DETAIL_FIXTURE, &detail::ADD_TO_CART, "detail::ADD_TO_CART");
    assert_present(DETAIL_FIXTURE, &detail::EDITION_NAME, "detail::EDITION_NAME");
    assert_present(DETAIL_FIXTURE, &detail::DATA_BLOCK, "detail::DATA_BLOCK");
}

#[test]
fn test_every_card_yields_an_entry() {
    let document = Html::parse_document(LISTING_FIXTURE);
    let cards = document.select(&listing::CARD).count();

    let (entries, _) = Parser::new().parse_listing(LISTING_FIXTURE).unwrap();
    assert_eq!(entries.len(), cards, "some catalog cards lost their link marker");
    assert!(entries.iter().all(|e| !e.title.is_empty()), "card name marker drifted");
    assert!(entries.iter().all(|e| !e.image_url.is_empty()), "card image marker drifted");
}

#[test]
fn test_every_add_to_cart_card_yields_an_edition() {
    let document = Html::parse_document(DETAIL_FIXTURE);
    let purchasable = document
        .select(&detail::EDITION_CARD)
        .filter(|card| card.select(&detail::ADD_TO_CART).next().is_some())
        .count();

    let parsed = Parser::new().parse_detail(DETAIL_FIXTURE, "10011898");
    assert_eq!(parsed.editions.len(), purchasable, "telemetry payload shape drifted");
    assert!(parsed.editions.iter().all(|e| !e.currency.is_empty()), "price detail keys drifted");
    assert!(parsed.editions.iter().all(|e| !e.title.is_empty()), "edition name marker drifted");
}

#[test]
fn test_missing_pagination_fails_loudly() {
    let html = LISTING_FIXTURE.replace("<ol", "<div").replace("</ol>", "</div>");

    let err = Parser::new().parse_listing(&html).unwrap_err();
    assert!(matches!(err, StoreError::MissingElement(_)));
}
