//! Fixed-shape result table produced by a batch lookup.

use serde::Serialize;

use crate::genius::ArtistRecord;

const ABSENT_CELL: &str = "-";

/// One row per search term. The three artist columns are `None` when the
/// term did not resolve; they are serialized as `null`, never omitted.
///
/// A resolved record may still lack every column, so the outcome is kept
/// alongside the columns instead of being inferred from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub search_term: String,
    pub artist_name: Option<String>,
    pub artist_id: Option<i64>,
    pub followers_count: Option<u64>,
    #[serde(skip)]
    resolved: bool,
}

impl ResultRow {
    pub fn resolved(search_term: &str, artist: &ArtistRecord) -> Self {
        Self {
            search_term: search_term.to_string(),
            artist_name: artist.name().map(String::from),
            artist_id: artist.id(),
            followers_count: artist.followers_count(),
            resolved: true,
        }
    }

    pub fn unresolved(search_term: &str) -> Self {
        Self {
            search_term: search_term.to_string(),
            artist_name: None,
            artist_id: None,
            followers_count: None,
            resolved: false,
        }
    }

    pub fn from_outcome(search_term: &str, artist: Option<&ArtistRecord>) -> Self {
        match artist {
            Some(artist) => Self::resolved(search_term, artist),
            None => Self::unresolved(search_term),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Cells in column order, absent values rendered as `-`.
    pub fn display_cells(&self) -> [String; 4] {
        [
            self.search_term.clone(),
            self.artist_name
                .clone()
                .unwrap_or_else(|| ABSENT_CELL.to_string()),
            display_opt(self.artist_id),
            display_opt(self.followers_count),
        ]
    }
}

fn display_opt<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| ABSENT_CELL.to_string())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArtistTable {
    rows: Vec<ResultRow>,
}

impl ArtistTable {
    pub const COLUMNS: [&'static str; 4] =
        ["search_term", "artist_name", "artist_id", "followers_count"];

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn resolved_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_resolved()).count()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl FromIterator<ResultRow> for ArtistTable {
    fn from_iter<I: IntoIterator<Item = ResultRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
