//! Common test infrastructure
//!
//! Spins up a fake Genius API on a random local port and builds resolvers
//! pointed at it. Tests should only import from this module.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{resolver_for, fixtures, MockGenius, MockResponse};
//!
//! #[test]
//! fn test_lookup() {
//!     let server = MockGenius::builder()
//!         .search("Adele", MockResponse::json(fixtures::wrapped_search(2300)))
//!         .artist(2300, MockResponse::json(fixtures::wrapped_artist(2300, "Adele", 10)))
//!         .spawn();
//!     let resolver = resolver_for(&server);
//!     assert!(resolver.resolve("Adele").is_some());
//! }
//! ```

#![allow(dead_code)]

mod constants;
pub mod fixtures;
mod mock_api;

pub use constants::*;
pub use mock_api::{MockGenius, MockResponse, RecordedRequest};

use genius_artists::config::ApiSettings;
use genius_artists::{ArtistResolver, HttpTransport};

/// Resolver with the test token and a short timeout, talking to `server`.
pub fn resolver_for(server: &MockGenius) -> ArtistResolver<HttpTransport> {
    resolver_with_token(server, TEST_TOKEN)
}

pub fn resolver_with_token(server: &MockGenius, token: &str) -> ArtistResolver<HttpTransport> {
    let settings = ApiSettings {
        base_url: server.base_url.clone(),
        access_token: Some(token.to_string()),
        timeout_sec: CLIENT_TIMEOUT_SEC,
    };
    ArtistResolver::from_settings(&settings).expect("Failed to build resolver")
}
