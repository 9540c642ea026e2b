use async_trait::async_trait;

use super::{Movie, MovieStatistics, Result};

/// Read-only lookups against the movie collection.
///
/// Text lookups are case-insensitive substring matches. Results are ordered
/// by IMDB rating, best first.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Movies whose title contains `title`, at most [`super::TITLE_SEARCH_LIMIT`].
    async fn search_by_title(&self, title: &str) -> Result<Vec<Movie>>;

    /// Movies directed by someone whose name contains `director`.
    async fn by_director(&self, director: &str) -> Result<Vec<Movie>>;

    /// The `limit` best rated movies, capped at [`super::TOP_RATED_MAX_LIMIT`].
    async fn top_rated(&self, limit: usize) -> Result<Vec<Movie>>;

    /// Movies whose genre list contains `genre`.
    async fn by_genre(&self, genre: &str) -> Result<Vec<Movie>>;

    /// Movies released between `start` and `end`, both inclusive.
    async fn by_year_range(&self, start: u16, end: u16) -> Result<Vec<Movie>>;

    /// Movies with a star whose name contains `actor`.
    async fn with_actor(&self, actor: &str) -> Result<Vec<Movie>>;

    /// Totals, average rating, year span and the most prolific directors.
    async fn statistics(&self) -> Result<MovieStatistics>;
}
