// crates/tripgeo-core/src/text.rs

//! Text normalization helpers.
//!
//! Two forms matter here:
//! - [`normalize_query`] is applied to every incoming search query
//!   before matching (trim + lowercase). Matching is case-insensitive.
//! - [`fold_key`] additionally strips accents via `deunicode` and is
//!   used at ingestion time to derive `name_normalized` for records
//!   that do not ship one ("Zürich" → "zurich").

use deunicode::deunicode;

/// Normalize a raw search query: trim surrounding whitespace and
/// lowercase. This is the exact form the store tiers match against.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// ASCII-fold and lowercase a display name for use as a matchable key.
pub fn fold_key(s: &str) -> String {
    deunicode(s.trim()).to_lowercase()
}
