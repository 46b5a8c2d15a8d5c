//! Artist resolution: search term → Genius artist record.
//!
//! ## Protocol per term
//!
//! ```text
//! GET /search?q=<term> → first hit with a usable artist id
//!                      → GET /artists/<id> → artist record
//! ```
//!
//! Any failure along the way (transport or payload shape) makes the
//! resolution absent. [`ArtistResolver::try_resolve`] keeps the reason,
//! [`ArtistResolver::resolve`] logs it and drops it.

use tracing::{debug, warn};

use super::error::{ConfigurationError, ResolveMiss, ShapeMismatch};
use super::models::ArtistRecord;
use super::shape;
use super::transport::{HttpTransport, Transport};
use super::{ARTISTS_PATH, SEARCH_PATH, SEARCH_QUERY_PARAM};
use crate::config::ApiSettings;

pub struct ArtistResolver<T: Transport> {
    transport: T,
}

impl ArtistResolver<HttpTransport> {
    /// Build a resolver talking to the real API.
    pub fn from_settings(settings: &ApiSettings) -> Result<Self, ConfigurationError> {
        Ok(Self::new(HttpTransport::new(settings)?))
    }
}

impl<T: Transport> ArtistResolver<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolve a search term to the artist of its most relevant hit.
    ///
    /// Returns `None` for unknown artists, unreachable API and unexpected
    /// payloads alike.
    pub fn resolve(&self, search_term: &str) -> Option<ArtistRecord> {
        match self.try_resolve(search_term) {
            Ok(artist) => Some(artist),
            Err(miss) => {
                log_miss(search_term, &miss);
                None
            }
        }
    }

    /// Like [`resolve`](Self::resolve), but reports why nothing was found.
    pub fn try_resolve(&self, search_term: &str) -> Result<ArtistRecord, ResolveMiss> {
        let artist_id = self.search_artist_id(search_term)?;
        debug!("Search for {:?} resolved to artist {}", search_term, artist_id);
        self.fetch_artist_record(artist_id)
    }

    /// Only the search half: the artist id of the first usable hit.
    pub fn lookup_artist_id(&self, search_term: &str) -> Option<i64> {
        match self.search_artist_id(search_term) {
            Ok(artist_id) => Some(artist_id),
            Err(miss) => {
                log_miss(search_term, &miss);
                None
            }
        }
    }

    /// Only the detail half: fetch an artist by its Genius id.
    pub fn fetch_artist(&self, artist_id: i64) -> Option<ArtistRecord> {
        match self.fetch_artist_record(artist_id) {
            Ok(artist) => Some(artist),
            Err(miss) => {
                log_miss(&format!("artist {}", artist_id), &miss);
                None
            }
        }
    }

    fn search_artist_id(&self, search_term: &str) -> Result<i64, ResolveMiss> {
        let body = self
            .transport
            .get_json(SEARCH_PATH, &[(SEARCH_QUERY_PARAM, search_term)])
            .map_err(ResolveMiss::Search)?;

        let hits = shape::search_hits(&body).ok_or(ShapeMismatch::NoHits)?;
        let artist_id = shape::first_artist_id(hits).ok_or(ShapeMismatch::NoArtistReference)?;
        Ok(artist_id)
    }

    fn fetch_artist_record(&self, artist_id: i64) -> Result<ArtistRecord, ResolveMiss> {
        let path = format!("{}/{}", ARTISTS_PATH, artist_id);
        let body = self
            .transport
            .get_json(&path, &[])
            .map_err(|source| ResolveMiss::Detail { artist_id, source })?;

        let artist = shape::detail_artist(&body).ok_or(ShapeMismatch::NoArtistRecord)?;
        Ok(ArtistRecord::new(artist.clone()))
    }
}

fn log_miss(subject: &str, miss: &ResolveMiss) {
    if miss.is_transport() {
        warn!("Lookup for {:?} failed: {}", subject, miss);
    } else {
        debug!("No artist for {:?}: {}", subject, miss);
    }
}
