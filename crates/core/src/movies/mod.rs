mod error;
mod http_mapping;
mod summary;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use summary::{contains_ignore_case, sort_by_rating, summarize};
pub use traits::MovieRepository;
pub use types::{
    DirectorSummary, Movie, MovieStatistics, YearRange, TITLE_SEARCH_LIMIT, TOP_DIRECTORS_LIMIT,
    TOP_RATED_MAX_LIMIT,
};
