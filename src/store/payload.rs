//! Decoding of structured payloads embedded in store pages.
//!
//! Edition cards carry a `data-telemetry-meta` attribute whose text is almost
//! JSON, but may spell booleans and nulls as `True`/`False`/`None`. The
//! payload is normalized to strict JSON before it reaches serde, so callers
//! only ever see typed values.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Telemetry payload attached to an edition call to action.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryMeta {
    #[serde(default)]
    pub cta_sub_type: Option<String>,
    #[serde(default)]
    pub product_detail: Vec<ProductMeta>,
}

impl TelemetryMeta {
    /// First price entry of the first product, if any.
    pub fn price(&self) -> Option<&PriceMeta> {
        self.product_detail.first()?.product_price_detail.first()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMeta {
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub product_price_detail: Vec<PriceMeta>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceMeta {
    #[serde(default, deserialize_with = "display_string")]
    pub original_price_value: String,
    #[serde(default, deserialize_with = "display_string")]
    pub discount_price_value: String,
    #[serde(default, deserialize_with = "display_string")]
    pub price_currency_code: String,
}

/// Accepts strings, numbers and null; the result is always display text.
fn display_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Rewrites non-JSON literals outside string literals into their JSON form.
pub fn normalize_payload(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut word = String::new();
    let mut in_string = false;
    let mut escaped = false;

    for c in raw.chars() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        if c.is_ascii_alphanumeric() || c == '_' {
            word.push(c);
            continue;
        }

        flush_word(&mut word, &mut out);
        if c == '"' {
            in_string = true;
        }
        out.push(c);
    }

    flush_word(&mut word, &mut out);
    out
}

fn flush_word(word: &mut String, out: &mut String) {
    if word.is_empty() {
        return;
    }
    out.push_str(match word.as_str() {
        "True" => "true",
        "False" => "false",
        "None" | "undefined" => "null",
        other => other,
    });
    word.clear();
}

/// Normalizes and parses a telemetry attribute.
pub fn parse_telemetry(raw: &str) -> serde_json::Result<TelemetryMeta> {
    serde_json::from_str(&normalize_payload(raw))
}

/// Reads `localizedGenres` of the `Product:{product_id}` entry in a data
/// block's cache.
///
/// Both a top-level `cache` object and a Next.js style `props.apolloState`
/// object are searched. Other products in the cache (add-ons, bundles) are
/// never consulted.
pub fn parse_embedded_genres(raw: &str, product_id: &str) -> serde_json::Result<Option<Vec<String>>> {
    let root: Value = serde_json::from_str(raw.trim())?;

    let cache = root
        .get("cache")
        .or_else(|| root.pointer("/props/apolloState"))
        .and_then(Value::as_object);

    let Some(product) = cache.and_then(|cache| cache.get(&format!("Product:{}", product_id))) else {
        return Ok(None);
    };

    let genres = product
        .get("localizedGenres")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Object(obj) => obj.get("value").and_then(Value::as_str).map(String::from),
                    _ => None,
                })
                .collect()
        });

    Ok(genres)
}
