//! Genius artist lookup library
//!
//! Resolves free-text artist names against the Genius API and normalizes the
//! handful of fields we care about (name, id, follower count) across the
//! response shapes the live API and its mocks produce.

pub mod batch;
pub mod config;
pub mod genius;
pub mod table;

// Re-export commonly used types for convenience
pub use batch::resolve_many;
pub use genius::{
    ArtistRecord, ArtistResolver, ConfigurationError, HttpTransport, ResolveMiss, Transport,
    TransportError,
};
pub use table::{ArtistTable, ResultRow};
