//! Response bodies in the shapes the Genius API and its mocks produce.

use serde_json::{json, Value};

/// `{"meta": ..., "response": {"hits": [{"result": {"primary_artist": ...}}]}}`
pub fn wrapped_search(artist_id: i64) -> Value {
    json!({
        "meta": {"status": 200},
        "response": {
            "hits": [{
                "index": "song",
                "type": "song",
                "result": {
                    "id": 90000 + artist_id,
                    "title": "Some Song",
                    "primary_artist": {"id": artist_id, "name": "ignored"}
                }
            }]
        }
    })
}

/// Hits at the top level, artist reference directly on the hit.
pub fn bare_search(artist_id: i64) -> Value {
    json!({"hits": [{"primary_artist": {"id": artist_id}}]})
}

pub fn empty_search() -> Value {
    json!({"meta": {"status": 200}, "response": {"hits": []}})
}

/// `{"meta": ..., "response": {"artist": {...}}}`
pub fn wrapped_artist(artist_id: i64, name: &str, followers: u64) -> Value {
    json!({
        "meta": {"status": 200},
        "response": {
            "artist": {
                "id": artist_id,
                "name": name,
                "followers_count": followers,
                "url": format!("https://genius.com/artists/{}", name.replace(' ', "-"))
            }
        }
    })
}

/// The artist record sits directly where the envelope is.
pub fn bare_artist(artist_id: i64, name: &str) -> Value {
    json!({"response": {"id": artist_id, "name": name}})
}

/// Follower count only under `stats.followers`.
pub fn stats_artist(artist_id: i64, name: &str, followers: u64) -> Value {
    json!({"artist": {"id": artist_id, "name": name, "stats": {"followers": followers}}})
}
