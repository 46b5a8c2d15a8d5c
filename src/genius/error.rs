use thiserror::Error;

/// Errors raised while building a resolver. These are fatal for the caller.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("No Genius access token configured (set GENIUS_ACCESS_TOKEN, --access-token or access_token in the config file)")]
    MissingAccessToken,

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// A single GET that did not produce a JSON object.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Response body is a JSON {0}, expected an object")]
    NotAnObject(&'static str),
}

/// The decoded payload did not contain what we looked for.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShapeMismatch {
    #[error("search response has no hits")]
    NoHits,

    #[error("no hit references an artist with a usable id")]
    NoArtistReference,

    #[error("artist response holds no artist record")]
    NoArtistRecord,
}

/// Why a resolution came back empty.
#[derive(Debug, Error)]
pub enum ResolveMiss {
    #[error("search request failed: {0}")]
    Search(#[source] TransportError),

    #[error("artist {artist_id} request failed: {source}")]
    Detail {
        artist_id: i64,
        #[source]
        source: TransportError,
    },

    #[error("{0}")]
    Shape(#[from] ShapeMismatch),
}

impl ResolveMiss {
    /// True when the miss came from the network rather than from the payload.
    pub fn is_transport(&self) -> bool {
        matches!(self, ResolveMiss::Search(_) | ResolveMiss::Detail { .. })
    }
}
