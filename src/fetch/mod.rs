use std::future::Future;

use crate::error::Result;
use crate::records::Match;

pub mod client;

pub use client::{csv_status_error, matches_status_error, ApiClient};

pub type FetchResult<T> = Result<T>;

/// The two backend reads the client depends on.
///
/// `ApiClient` talks HTTP; tests plug in canned sources.
pub trait FixturesSource: Send + Sync + 'static {
    /// `GET /api/matches`, decoded.
    fn fetch_matches(&self) -> impl Future<Output = FetchResult<Vec<Match>>> + Send;

    /// `GET /api/matches/csv`, as opaque bytes.
    fn fetch_csv(&self) -> impl Future<Output = FetchResult<Vec<u8>>> + Send;
}
