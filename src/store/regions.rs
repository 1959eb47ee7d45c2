//! PlayStation Store locale regions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported store regions.
///
/// `En` is the base region: its pages live at the root of the store origin.
/// Every other region inserts its locale segment into the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Region {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "en-us")]
    EnUs,
    #[serde(rename = "en-gb")]
    EnGb,
    #[serde(rename = "en-tr")]
    EnTr,
    #[serde(rename = "de-de")]
    DeDe,
    #[serde(rename = "fr-fr")]
    FrFr,
    #[serde(rename = "es-es")]
    EsEs,
    #[serde(rename = "ja-jp")]
    JaJp,
}

impl Region {
    /// Returns the locale code used in store URLs.
    pub fn code(&self) -> &'static str {
        match self {
            Region::En => "en",
            Region::EnUs => "en-us",
            Region::EnGb => "en-gb",
            Region::EnTr => "en-tr",
            Region::DeDe => "de-de",
            Region::FrFr => "fr-fr",
            Region::EsEs => "es-es",
            Region::JaJp => "ja-jp",
        }
    }

    /// Returns the path segment inserted after the origin, if any.
    pub fn locale_segment(&self) -> Option<&'static str> {
        match self {
            Region::En => None,
            other => Some(other.code()),
        }
    }

    /// Returns a human-readable territory name.
    pub fn territory(&self) -> &'static str {
        match self {
            Region::En => "Default",
            Region::EnUs => "United States",
            Region::EnGb => "United Kingdom",
            Region::EnTr => "Turkey",
            Region::DeDe => "Germany",
            Region::FrFr => "France",
            Region::EsEs => "Spain",
            Region::JaJp => "Japan",
        }
    }

    /// Returns the Accept-Language header value for this region.
    pub fn accept_language(&self) -> &'static str {
        match self {
            Region::En | Region::EnUs => "en-US,en;q=0.9",
            Region::EnGb => "en-GB,en;q=0.9",
            Region::EnTr => "en-TR,en;q=0.9,tr;q=0.8",
            Region::DeDe => "de-DE,de;q=0.9,en;q=0.8",
            Region::FrFr => "fr-FR,fr;q=0.9,en;q=0.8",
            Region::EsEs => "es-ES,es;q=0.9,en;q=0.8",
            Region::JaJp => "ja-JP,ja;q=0.9,en;q=0.8",
        }
    }

    /// Returns all supported regions.
    pub fn all() -> &'static [Region] {
        &[
            Region::En,
            Region::EnUs,
            Region::EnGb,
            Region::EnTr,
            Region::DeDe,
            Region::FrFr,
            Region::EsEs,
            Region::JaJp,
        ]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Region {
    type Err = RegionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase().replace('_', "-");
        Region::all()
            .iter()
            .copied()
            .find(|region| region.code() == code)
            .ok_or_else(|| RegionParseError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionParseError(pub String);

impl fmt::Display for RegionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let valid: Vec<&str> = Region::all().iter().map(|r| r.code()).collect();
        write!(f, "Unknown region '{}'. Valid regions: {}", self.0, valid.join(", "))
    }
}

impl std::error::Error for RegionParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_parsing_all() {
        for region in Region::all() {
            assert_eq!(Region::from_str(region.code()).unwrap(), *region);
        }

        // Case and separator insensitive
        assert_eq!(Region::from_str("EN-TR").unwrap(), Region::EnTr);
        assert_eq!(Region::from_str("en_gb").unwrap(), Region::EnGb);
        assert_eq!(Region::from_str(" ja-jp ").unwrap(), Region::JaJp);

        // Invalid
        assert!(Region::from_str("xyz").is_err());
        assert!(Region::from_str("").is_err());
        assert!(Region::from_str("tr").is_err());
    }

    #[test]
    fn test_locale_segment() {
        assert_eq!(Region::En.locale_segment(), None);
        for region in Region::all().iter().filter(|r| **r != Region::En) {
            assert_eq!(region.locale_segment(), Some(region.code()));
        }
    }

    #[test]
    fn test_accept_language() {
        assert!(Region::En.accept_language().starts_with("en-US"));
        assert!(Region::EnGb.accept_language().contains("en-GB"));
        assert!(Region::EnTr.accept_language().contains("tr"));
        assert!(Region::DeDe.accept_language().contains("de-DE"));
        assert!(Region::JaJp.accept_language().contains("ja-JP"));
    }

    #[test]
    fn test_region_all() {
        let all = Region::all();
        assert_eq!(all.len(), 8);
        assert_eq!(all[0], Region::En);
        assert!(all.contains(&Region::EnTr));
    }

    #[test]
    fn test_region_display() {
        assert_eq!(Region::En.to_string(), "en");
        assert_eq!(Region::EnTr.to_string(), "en-tr");
        assert_eq!(Region::JaJp.to_string(), "ja-jp");
    }

    #[test]
    fn test_region_default() {
        assert_eq!(Region::default(), Region::En);
    }

    #[test]
    fn test_region_parse_error_display() {
        let err = Region::from_str("xyz").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("xyz"));
        assert!(msg.contains("Valid regions"));
        assert!(msg.contains("en-tr"));
    }

    #[test]
    fn test_region_serde() {
        let json = serde_json::to_string(&Region::EnTr).unwrap();
        assert_eq!(json, "\"en-tr\"");

        let parsed: Region = serde_json::from_str("\"de-de\"").unwrap();
        assert_eq!(parsed, Region::DeDe);
    }
}
