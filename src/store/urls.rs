//! Store URL construction.

use crate::store::regions::Region;

/// Public origin of the PlayStation Store.
pub const STORE_ORIGIN: &str = "https://store.playstation.com";

/// Builds the catalog browse URL for a region and page.
pub fn listing_url(region: Region, page: u32) -> String {
    listing_url_at(STORE_ORIGIN, region, page)
}

/// Builds the concept detail URL for a region.
pub fn detail_url(concept_id: &str, region: Region) -> String {
    detail_url_at(STORE_ORIGIN, concept_id, region)
}

/// Same as [`listing_url`] against an arbitrary origin.
pub fn listing_url_at(origin: &str, region: Region, page: u32) -> String {
    format!("{}/pages/browse/{}", region_root(origin, region), page)
}

/// Same as [`detail_url`] against an arbitrary origin.
pub fn detail_url_at(origin: &str, concept_id: &str, region: Region) -> String {
    format!("{}/concept/{}", region_root(origin, region), urlencoding::encode(concept_id))
}

fn region_root(origin: &str, region: Region) -> String {
    let origin = origin.trim_end_matches('/');
    match region.locale_segment() {
        Some(locale) => format!("{}/{}", origin, locale),
        None => origin.to_string(),
    }
}

/// Region whose locale segment leads the URL path. URLs without one belong
/// to the base region.
pub fn region_of(url: &str) -> Region {
    let path = url.split_once("://").map_or(url, |(_, rest)| rest);
    path.split(['/', '?', '#'])
        .nth(1)
        .and_then(|segment| segment.parse().ok())
        .unwrap_or_default()
}

/// Returns the final non-empty path segment of a URL, ignoring query and fragment.
pub fn last_path_segment(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.trim_end_matches('/').rsplit('/').next().unwrap_or(path)
}

/// Drops any query-string suffix.
pub fn strip_query(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}
