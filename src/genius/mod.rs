//! Genius API client.
//!
//! - `transport`: the GET-and-decode seam, with a blocking reqwest implementation
//! - `shape`: ordered lookup strategies over loosely-shaped JSON payloads
//! - `resolver`: the search → artist-detail protocol

mod error;
pub mod models;
pub mod resolver;
pub mod shape;
pub mod transport;

pub use error::{ConfigurationError, ResolveMiss, ShapeMismatch, TransportError};
pub use models::{ArtistRecord, JsonObject};
pub use resolver::ArtistResolver;
pub use transport::{HttpTransport, Transport};

pub const DEFAULT_BASE_URL: &str = "https://api.genius.com";
pub const DEFAULT_TIMEOUT_SEC: u64 = 10;

pub(crate) const SEARCH_PATH: &str = "/search";
pub(crate) const SEARCH_QUERY_PARAM: &str = "q";
pub(crate) const ARTISTS_PATH: &str = "/artists";
