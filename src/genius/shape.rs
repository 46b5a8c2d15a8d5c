//! Lookups over the loosely-shaped JSON the Genius API (and its mocks) return.
//!
//! Every place where the payload can take more than one form is expressed as
//! an ordered list of lookups handed to [`try_extract`]; the first lookup that
//! yields a value wins. Keeping the lists as data makes the fallback order
//! readable in one place and testable on its own.

use serde_json::{Number, Value};

use super::models::JsonObject;

const RESPONSE_KEY: &str = "response";
const HITS_KEY: &str = "hits";
const RESULT_KEY: &str = "result";
const ID_KEY: &str = "id";
const ARTIST_KEY: &str = "artist";
const PRIMARY_ARTIST_KEY: &str = "primary_artist";

/// Where a hit may point at its artist, most specific first.
const HIT_ARTIST_LOOKUPS: &[fn(&JsonObject) -> Option<i64>] = &[primary_artist_ref, artist_ref];

/// Where an artist-detail body may keep the artist record.
const DETAIL_ARTIST_LOOKUPS: &[fn(&JsonObject) -> Option<&JsonObject>] =
    &[enveloped_artist, top_level_artist, bare_artist];

/// Where an artist record may keep its follower count. Each lookup yields the
/// raw number so that the first numeric location decides the count.
const FOLLOWERS_LOOKUPS: &[fn(&JsonObject) -> Option<&Number>] =
    &[followers_count_field, followers_field, stats_followers_field];

/// Runs `lookups` against `record` in order and returns the first hit.
pub fn try_extract<'a, T, F>(record: &'a JsonObject, lookups: &[F]) -> Option<T>
where
    F: Fn(&'a JsonObject) -> Option<T>,
{
    lookups.iter().find_map(|lookup| lookup(record))
}

/// The `"response"` object when the body is wrapped in one, the body otherwise.
pub fn unwrap_envelope(body: &JsonObject) -> &JsonObject {
    match body.get(RESPONSE_KEY) {
        Some(Value::Object(inner)) => inner,
        _ => body,
    }
}

fn has_envelope(body: &JsonObject) -> bool {
    matches!(body.get(RESPONSE_KEY), Some(Value::Object(_)))
}

/// Truthiness of a JSON value: null, false, zero and empty containers are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Integer coercion for ids: integers as-is, finite floats truncated toward
/// zero, strings parsed after trimming. Values outside the `i64` range are
/// rejected rather than clamped. Anything else is not an id.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// A count that fits a non-negative integer. Floats count only when integral.
fn non_negative_count(n: &Number) -> Option<u64> {
    n.as_u64().or_else(|| {
        n.as_f64()
            .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
    })
}

// ============================================================================
// Search response
// ============================================================================

/// The non-empty hit list of a search body, wherever it lives.
pub fn search_hits(body: &JsonObject) -> Option<&[Value]> {
    match unwrap_envelope(body).get(HITS_KEY) {
        Some(Value::Array(hits)) if !hits.is_empty() => Some(hits.as_slice()),
        _ => None,
    }
}

/// The part of a hit that carries the artist reference: its `"result"`
/// object if it has one, the hit itself otherwise.
pub fn hit_payload(hit: &Value) -> Option<&JsonObject> {
    let hit = hit.as_object()?;
    match hit.get(RESULT_KEY) {
        Some(Value::Object(result)) => Some(result),
        _ => Some(hit),
    }
}

/// Artist id referenced by a single hit payload.
pub fn hit_artist_id(payload: &JsonObject) -> Option<i64> {
    try_extract(payload, HIT_ARTIST_LOOKUPS)
}

/// Artist id of the first hit that references one. Search results come back
/// most relevant first, so earlier hits win.
pub fn first_artist_id(hits: &[Value]) -> Option<i64> {
    hits.iter()
        .filter_map(hit_payload)
        .find_map(hit_artist_id)
}

fn artist_id_under(payload: &JsonObject, key: &str) -> Option<i64> {
    let candidate = payload.get(key)?.as_object()?;
    let id = candidate.get(ID_KEY).filter(|id| is_truthy(id))?;
    coerce_integer(id).filter(|id| *id != 0)
}

fn primary_artist_ref(payload: &JsonObject) -> Option<i64> {
    artist_id_under(payload, PRIMARY_ARTIST_KEY)
}

fn artist_ref(payload: &JsonObject) -> Option<i64> {
    artist_id_under(payload, ARTIST_KEY)
}

// ============================================================================
// Artist detail response
// ============================================================================

/// The artist record inside an artist-detail body.
pub fn detail_artist(body: &JsonObject) -> Option<&JsonObject> {
    try_extract(body, DETAIL_ARTIST_LOOKUPS)
}

fn enveloped_artist(body: &JsonObject) -> Option<&JsonObject> {
    unwrap_envelope(body).get(ARTIST_KEY)?.as_object()
}

/// Only distinct from `enveloped_artist` when the body carries an envelope
/// that lacks the artist key.
fn top_level_artist(body: &JsonObject) -> Option<&JsonObject> {
    if !has_envelope(body) {
        return None;
    }
    body.get(ARTIST_KEY)?.as_object()
}

/// Some back-ends put the artist record itself where the envelope is.
fn bare_artist(body: &JsonObject) -> Option<&JsonObject> {
    let block = unwrap_envelope(body);
    block
        .get(ID_KEY)
        .filter(|id| is_truthy(id))
        .map(|_| block)
}

// ============================================================================
// Artist record fields
// ============================================================================

pub fn artist_name(artist: &JsonObject) -> Option<&str> {
    artist.get("name").and_then(Value::as_str)
}

pub fn artist_id(artist: &JsonObject) -> Option<i64> {
    artist.get(ID_KEY).and_then(coerce_integer)
}

/// Follower count from the first location holding a JSON number. Non-numeric
/// values are passed over, but a number that is negative or fractional makes
/// the count unknown. Absent everywhere means unknown, not zero.
pub fn followers_count(artist: &JsonObject) -> Option<u64> {
    try_extract(artist, FOLLOWERS_LOOKUPS).and_then(non_negative_count)
}

fn as_number(value: &Value) -> Option<&Number> {
    match value {
        Value::Number(n) => Some(n),
        _ => None,
    }
}

fn followers_count_field(artist: &JsonObject) -> Option<&Number> {
    artist.get("followers_count").and_then(as_number)
}

fn followers_field(artist: &JsonObject) -> Option<&Number> {
    artist.get("followers").and_then(as_number)
}

fn stats_followers_field(artist: &JsonObject) -> Option<&Number> {
    artist
        .get("stats")?
        .as_object()?
        .get("followers")
        .and_then(as_number)
}
