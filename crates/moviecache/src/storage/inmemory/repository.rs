//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use moviecache_core::movies::{
    contains_ignore_case, sort_by_rating, summarize, Movie, MovieRepository, MovieStatistics,
    RepositoryError, Result, TITLE_SEARCH_LIMIT, TOP_RATED_MAX_LIMIT,
};

use crate::mock_data::generate_mock_movies;

/// In-memory movie collection.
///
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMovieRepository {
    movies: Arc<RwLock<Vec<Movie>>>,
}

impl InMemoryMovieRepository {
    /// Creates a repository holding `movies`.
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies: Arc::new(RwLock::new(movies)),
        }
    }

    /// Creates a repository seeded with the bundled sample collection.
    pub fn seeded() -> Self {
        Self::new(generate_mock_movies())
    }

    /// Returns the matching movies, best rated first.
    async fn find<P>(&self, predicate: P) -> Vec<Movie>
    where
        P: Fn(&Movie) -> bool,
    {
        let movies = self.movies.read().await;
        let mut found: Vec<Movie> = movies.iter().filter(|m| predicate(m)).cloned().collect();
        sort_by_rating(&mut found);
        found
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn search_by_title(&self, title: &str) -> Result<Vec<Movie>> {
        let mut found = self.find(|m| contains_ignore_case(&m.title, title)).await;
        found.truncate(TITLE_SEARCH_LIMIT);
        Ok(found)
    }

    async fn by_director(&self, director: &str) -> Result<Vec<Movie>> {
        Ok(self
            .find(|m| contains_ignore_case(&m.director, director))
            .await)
    }

    async fn top_rated(&self, limit: usize) -> Result<Vec<Movie>> {
        let mut found = self.find(|_| true).await;
        found.truncate(limit.min(TOP_RATED_MAX_LIMIT));
        Ok(found)
    }

    async fn by_genre(&self, genre: &str) -> Result<Vec<Movie>> {
        Ok(self.find(|m| contains_ignore_case(&m.genre, genre)).await)
    }

    async fn by_year_range(&self, start: u16, end: u16) -> Result<Vec<Movie>> {
        if start > end {
            return Err(RepositoryError::InvalidData(format!(
                "start year {start} is after end year {end}"
            )));
        }
        Ok(self.find(|m| (start..=end).contains(&m.year)).await)
    }

    async fn with_actor(&self, actor: &str) -> Result<Vec<Movie>> {
        Ok(self
            .find(|m| m.stars.iter().any(|star| contains_ignore_case(star, actor)))
            .await)
    }

    async fn statistics(&self) -> Result<MovieStatistics> {
        let movies = self.movies.read().await;
        Ok(summarize(&movies))
    }
}
