//! Pure helpers shared by repository implementations.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::{DirectorSummary, Movie, MovieStatistics, YearRange, TOP_DIRECTORS_LIMIT};

/// Case-insensitive substring test used by every text lookup.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Orders movies by rating, best first. Ties keep their original order.
pub fn sort_by_rating(movies: &mut [Movie]) {
    movies.sort_by(|a, b| {
        b.imdb_rating
            .partial_cmp(&a.imdb_rating)
            .unwrap_or(Ordering::Equal)
    });
}

/// Computes collection-wide statistics over `movies`.
pub fn summarize(movies: &[Movie]) -> MovieStatistics {
    let total_movies = movies.len() as u64;

    let average_rating = if movies.is_empty() {
        0.0
    } else {
        let sum: f64 = movies.iter().map(|m| f64::from(m.imdb_rating)).sum();
        round2(sum / movies.len() as f64)
    };

    let year_range = movies
        .iter()
        .map(|m| m.year)
        .min()
        .zip(movies.iter().map(|m| m.year).max())
        .map(|(earliest, latest)| YearRange { earliest, latest });

    // director -> (count, rating sum, first position)
    let mut by_director: HashMap<&str, (u64, f64, usize)> = HashMap::new();
    for (position, movie) in movies.iter().enumerate() {
        let slot = by_director
            .entry(movie.director.as_str())
            .or_insert((0, 0.0, position));
        slot.0 += 1;
        slot.1 += f64::from(movie.imdb_rating);
    }

    let mut ranked: Vec<_> = by_director.into_iter().collect();
    ranked.sort_by(|(_, a), (_, b)| b.0.cmp(&a.0).then(a.2.cmp(&b.2)));

    let top_directors = ranked
        .into_iter()
        .take(TOP_DIRECTORS_LIMIT)
        .map(|(director, (count, sum, _))| DirectorSummary {
            director: director.to_string(),
            count,
            avg_rating: round2(sum / count as f64),
        })
        .collect();

    MovieStatistics {
        total_movies,
        average_rating,
        year_range,
        top_directors,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, year: u16, rating: f32, director: &str) -> Movie {
        Movie::new(title, year, rating, director, "Drama")
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("The Dark Knight", "dark"));
        assert!(contains_ignore_case("The Dark Knight", "KNIGHT"));
        assert!(!contains_ignore_case("The Dark Knight", "batman"));
        assert!(contains_ignore_case("anything", ""));
    }

    #[test]
    fn test_sort_by_rating_is_descending_and_stable() {
        let mut movies = vec![
            movie("a", 2000, 7.0, "x"),
            movie("b", 2000, 9.0, "x"),
            movie("c", 2000, 7.0, "x"),
        ];
        sort_by_rating(&mut movies);

        let titles: Vec<_> = movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["b", "a", "c"]);
    }

    #[test]
    fn test_summarize() {
        let movies = vec![
            movie("Heat", 1995, 8.3, "Michael Mann"),
            movie("Collateral", 2004, 7.5, "Michael Mann"),
            movie("Inception", 2010, 8.8, "Christopher Nolan"),
        ];

        let stats = summarize(&movies);

        assert_eq!(stats.total_movies, 3);
        assert_eq!(stats.average_rating, 8.2);
        assert_eq!(
            stats.year_range,
            Some(YearRange {
                earliest: 1995,
                latest: 2010
            })
        );
        assert_eq!(stats.top_directors[0].director, "Michael Mann");
        assert_eq!(stats.top_directors[0].count, 2);
        assert_eq!(stats.top_directors[0].avg_rating, 7.9);
        assert_eq!(stats.top_directors[1].director, "Christopher Nolan");
    }

    #[test]
    fn test_summarize_empty_collection() {
        let stats = summarize(&[]);

        assert_eq!(stats.total_movies, 0);
        assert_eq!(stats.average_rating, 0.0);
        assert_eq!(stats.year_range, None);
        assert!(stats.top_directors.is_empty());
    }

    #[test]
    fn test_top_directors_is_bounded() {
        let movies: Vec<_> = (0..15)
            .map(|i| movie(&format!("m{i}"), 2000, 7.0, &format!("director {i}")))
            .collect();

        assert_eq!(summarize(&movies).top_directors.len(), TOP_DIRECTORS_LIMIT);
    }
}
