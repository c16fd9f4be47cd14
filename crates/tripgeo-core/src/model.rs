// crates/tripgeo-core/src/model.rs

//! Destination records as read from the trip-planning pool.
//!
//! A [`Destination`] is a read-only input to one search call: the
//! ranker never mutates or persists it. Creation and updates belong to
//! the ingestion path ([`DestinationStore::upsert`]).
//!
//! [`DestinationStore::upsert`]: crate::store::DestinationStore::upsert

use serde::{Deserialize, Serialize};

/// A searchable destination: a city, region, landmark or other place a
/// trip can be planned around.
///
/// `id` uniquely identifies a destination within the pool for a single
/// search and is the de-duplication key during the merge.
///
/// Only `name` and `name_normalized` are ever matched against a query.
/// `display_name` (and the hierarchy fields) are labels, not match
/// targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: i64,
    /// Primary display string, e.g. "Paris".
    pub name: String,
    /// Secondary matchable string: ASCII-folded or alias form of `name`.
    #[serde(default)]
    pub name_normalized: String,
    /// Full human-readable label, may include hierarchy:
    /// "Paris, Île-de-France, France".
    pub display_name: String,
    /// Classification tag, e.g. "place".
    #[serde(default)]
    pub category: String,
    /// Classification tag, e.g. "city". Serialized as `type`.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    pub lat: f64,
    pub lon: f64,
    /// Relevance score from the upstream dataset, higher = more relevant.
    #[serde(default)]
    pub importance: f64,
    /// Specificity rank, lower = more specific.
    #[serde(default)]
    pub place_rank: i32,
    /// Optional `[south, north, west, east]` bounds as numeric strings.
    #[serde(default)]
    pub boundingbox: Option<[String; 4]>,
}

impl Destination {
    /// Lowercased view of the primary name, used for match checks and
    /// for the alphabetical tier ordering.
    pub(crate) fn name_key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Lowercased view of the normalized name.
    pub(crate) fn normalized_key(&self) -> String {
        self.name_normalized.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Destination {
        Destination {
            id: 5,
            name: "Rome".into(),
            name_normalized: "roma".into(),
            display_name: "Rome, Lazio, Italy".into(),
            category: "place".into(),
            kind: "city".into(),
            country: Some("Italy".into()),
            region: Some("Lazio".into()),
            city: Some("Rome".into()),
            lat: 41.8933,
            lon: 12.4829,
            importance: 0.82,
            place_rank: 16,
            boundingbox: Some([
                "41.7692".into(),
                "42.0139".into(),
                "12.3411".into(),
                "12.7304".into(),
            ]),
        }
    }

    #[test]
    fn kind_serializes_as_type() {
        let json = serde_json::to_value(sample()).expect("serialize");
        assert_eq!(json["type"], "city");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let json = r#"{
            "id": 9,
            "name": "Berlin",
            "display_name": "Berlin, Germany",
            "lat": 52.52,
            "lon": 13.405
        }"#;
        let d: Destination = serde_json::from_str(json).expect("deserialize");
        assert_eq!(d.name_normalized, "");
        assert!(d.country.is_none());
        assert!(d.boundingbox.is_none());
        assert_eq!(d.place_rank, 0);
    }

    #[test]
    fn name_keys_are_lowercased() {
        let d = sample();
        assert_eq!(d.name_key(), "rome");
        assert_eq!(d.normalized_key(), "roma");
    }
}
