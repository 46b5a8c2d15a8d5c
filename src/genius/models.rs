use serde::Serialize;
use serde_json::{Map, Value};

use super::shape;

pub type JsonObject = Map<String, Value>;

/// An artist record exactly as the artist endpoint returned it.
///
/// Field access goes through the accessors below, which apply the same
/// tolerance for shape differences as the lookups that found the record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ArtistRecord(JsonObject);

impl ArtistRecord {
    pub fn new(fields: JsonObject) -> Self {
        Self(fields)
    }

    pub fn name(&self) -> Option<&str> {
        shape::artist_name(&self.0)
    }

    pub fn id(&self) -> Option<i64> {
        shape::artist_id(&self.0)
    }

    /// See [`shape::followers_count`] for the lookup order.
    pub fn followers_count(&self) -> Option<u64> {
        shape::followers_count(&self.0)
    }

    pub fn as_object(&self) -> &JsonObject {
        &self.0
    }
}
