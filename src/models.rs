//! Catalog Models
//!
//! Wire shapes returned by the catalog service and the resolved `Item`
//! the view renders. Optional wire fields are defaulted once, in
//! `Item::from(RawItem)`, so components never see partial records.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Inline blank-silhouette image for records without artwork
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iMTI4IiBoZWlnaHQ9IjEyOCIgdmlld0JveD0iMCAwIDEyOCAxMjgiIGZpbGw9Im5vbmUiIHhtbG5zPSJodHRwOi8vd3d3LnczLm9yZy8yMDAwL3N2ZyI+CjxyZWN0IHdpZHRoPSIxMjgiIGhlaWdodD0iMTI4IiBmaWxsPSIjRjVGNUY1Ii8+Cjx0ZXh0IHg9IjY0IiB5PSI2NCIgZm9udC1mYW1pbHk9IkFyaWFsIiBmb250LXNpemU9IjE0IiBmaWxsPSIjOTk5IiB0ZXh0LWFuY2hvcj0ibWlkZGxlIiBkeT0iMC4zZW0iPz88L3RleHQ+Cjwvc3ZnPg==";

pub const UNKNOWN: &str = "Unknown";

// ========================
// Wire Types
// ========================

/// `{name, url}` pair used by every listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Paged root listing (`/pokemon`, `/type`, `/generation`)
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceList {
    /// Only the `/pokemon` root listing is required to carry a count
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

/// `/type/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDetail {
    pub pokemon: Vec<CategoryMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryMember {
    pub pokemon: NamedResource,
}

/// `/generation/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationDetail {
    pub pokemon_species: Vec<NamedResource>,
}

/// Read a field as raw JSON and keep it only if it has the expected shape.
/// A mismatched field becomes `None` instead of failing the whole record.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// `/pokemon/{id|name}` with every field optional and shape-tolerant
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawItem {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub weight: Option<f64>,
    /// Slots stay raw so one bad slot does not drop the others
    #[serde(default, deserialize_with = "lenient")]
    pub types: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub sprites: Option<RawSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTypeSlot {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub kind: Option<RawName>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawName {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSprites {
    #[serde(default, deserialize_with = "lenient")]
    pub front_default: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub other: Option<RawOtherSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOtherSprites {
    #[serde(rename = "official-artwork", default, deserialize_with = "lenient")]
    pub official_artwork: Option<RawArtwork>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArtwork {
    #[serde(default, deserialize_with = "lenient")]
    pub front_default: Option<String>,
}

// ========================
// Resolved Types
// ========================

/// A creature record ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: u32,
    pub name: Option<String>,
    /// Category tags in slot order; empty when the record had none
    pub types: Vec<String>,
    pub image: Option<String>,
    /// Decimetres
    pub height: Option<f64>,
    /// Hectograms
    pub weight: Option<f64>,
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}

fn positive(v: Option<f64>) -> Option<f64> {
    v.filter(|v| v.is_finite() && *v > 0.0)
}

impl From<RawItem> for Item {
    fn from(raw: RawItem) -> Self {
        let name = match raw.name {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };

        let types = raw
            .types
            .unwrap_or_default()
            .into_iter()
            .map(|slot| {
                serde_json::from_value::<RawTypeSlot>(slot)
                    .ok()
                    .and_then(|s| s.kind)
                    .and_then(|k| non_empty(k.name))
                    .unwrap_or_else(|| "unknown".to_string())
            })
            .collect();

        let image = raw.sprites.and_then(|sprites| {
            let artwork = sprites
                .other
                .and_then(|o| o.official_artwork)
                .and_then(|a| non_empty(a.front_default));
            artwork.or_else(|| non_empty(sprites.front_default))
        });

        Self {
            id: raw.id.unwrap_or_default(),
            name,
            types,
            image,
            height: positive(raw.height),
            weight: positive(raw.weight),
        }
    }
}

impl Item {
    pub fn display_name(&self) -> String {
        self.name
            .as_deref()
            .map(capitalize_first)
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn image_src(&self) -> &str {
        self.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn height_label(&self) -> String {
        tenths_label(self.height, "m")
    }

    pub fn weight_label(&self) -> String {
        tenths_label(self.weight, "kg")
    }
}

/// Upper-case the first character, leave the rest as-is
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => UNKNOWN.to_string(),
    }
}

/// Scale tenths to a one-decimal value with unit, e.g. `7 -> "0.7 m"`
fn tenths_label(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{:.1} {}", v / 10.0, unit),
        None => UNKNOWN.to_string(),
    }
}

/// A generation with its button label
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub name: String,
    pub display_name: String,
}

impl Generation {
    /// "generation-iv" -> "GEN IV"
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let display_name = name.replacen("generation-", "Gen ", 1).to_uppercase();
        Self { name, display_name }
    }
}
