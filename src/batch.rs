//! Batch lookup: many search terms, one row each, in input order.

use std::panic::{self, AssertUnwindSafe};
use tracing::{error, info};

use crate::genius::{ArtistRecord, ArtistResolver, Transport};
use crate::table::{ArtistTable, ResultRow};

/// Resolve every term sequentially and collect one row per term.
///
/// Terms are not deduplicated. A term that fails to resolve, including one
/// whose transport panics, yields a row with null artist fields and the batch
/// carries on.
pub fn resolve_many<T, S>(resolver: &ArtistResolver<T>, search_terms: &[S]) -> ArtistTable
where
    T: Transport,
    S: AsRef<str>,
{
    let table: ArtistTable = search_terms
        .iter()
        .map(|term| {
            let term = term.as_ref();
            let artist = resolve_isolated(resolver, term);
            ResultRow::from_outcome(term, artist.as_ref())
        })
        .collect();

    info!(
        "Resolved {} of {} search terms",
        table.resolved_count(),
        table.len()
    );
    table
}

fn resolve_isolated<T: Transport>(
    resolver: &ArtistResolver<T>,
    search_term: &str,
) -> Option<ArtistRecord> {
    match panic::catch_unwind(AssertUnwindSafe(|| resolver.resolve(search_term))) {
        Ok(artist) => artist,
        Err(_) => {
            error!(
                "Resolution of {:?} panicked, recording it as not found",
                search_term
            );
            None
        }
    }
}
