use serde::{Deserialize, Serialize};

/// Maximum number of results returned by a title search.
pub const TITLE_SEARCH_LIMIT: usize = 5;

/// Upper bound applied to the `limit` of a top-rated lookup.
pub const TOP_RATED_MAX_LIMIT: usize = 50;

/// A movie document as stored in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: u16,
    pub imdb_rating: f32,
    pub director: String,
    /// Comma separated genres, e.g. `"Action, Crime, Drama"`.
    pub genre: String,
    pub stars: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
}

impl Movie {
    /// Creates a movie with no stars and no overview.
    pub fn new(
        title: impl Into<String>,
        year: u16,
        imdb_rating: f32,
        director: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year,
            imdb_rating,
            director: director.into(),
            genre: genre.into(),
            stars: Vec::new(),
            overview: None,
        }
    }

    pub fn with_stars<I, S>(mut self, stars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stars = stars.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = Some(overview.into());
        self
    }
}

/// Earliest and latest release years in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub earliest: u16,
    pub latest: u16,
}

/// Movie count and average rating for one director.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorSummary {
    pub director: String,
    pub count: u64,
    pub avg_rating: f64,
}

/// Aggregate figures over the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieStatistics {
    pub total_movies: u64,
    /// Mean IMDB rating rounded to two decimals, `0.0` for an empty collection.
    pub average_rating: f64,
    /// `None` for an empty collection.
    pub year_range: Option<YearRange>,
    /// Most prolific directors, at most [`TOP_DIRECTORS_LIMIT`].
    pub top_directors: Vec<DirectorSummary>,
}

/// Number of directors listed in [`MovieStatistics::top_directors`].
pub const TOP_DIRECTORS_LIMIT: usize = 10;
