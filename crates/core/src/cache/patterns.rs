//! Glob-style pattern matching for cache keys.
//!
//! Mirrors the subset of Redis `KEYS`/`SCAN MATCH` syntax the application
//! uses: `*` matches any run of characters (including none) and `?` matches
//! exactly one character. Every other character matches itself.

/// Checks if a cache key matches a glob pattern.
///
/// # Examples
///
/// ```
/// use moviecache_core::cache::pattern_matches;
///
/// assert!(pattern_matches("movie_cache:*", "movie_cache:title:0a1b2c"));
/// assert!(pattern_matches("movie_cache:*:0a1b2c", "movie_cache:genre:0a1b2c"));
/// assert!(pattern_matches("movie_cache:t?tle:*", "movie_cache:title:ff"));
/// assert!(!pattern_matches("movie_cache:title:*", "movie_cache:genre:ff"));
/// ```
pub fn pattern_matches(pattern: &str, key: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let key: Vec<char> = key.chars().collect();

    let (mut p, mut k) = (0, 0);
    // Position of the last `*` seen and the key index it was tried against.
    let mut backtrack: Option<(usize, usize)> = None;

    while k < key.len() {
        match pattern.get(p) {
            Some('*') => {
                backtrack = Some((p, k));
                p += 1;
            }
            Some('?') => {
                p += 1;
                k += 1;
            }
            Some(c) if *c == key[k] => {
                p += 1;
                k += 1;
            }
            _ => match backtrack {
                // Let the last star swallow one more character and retry.
                Some((star, star_k)) => {
                    p = star + 1;
                    k = star_k + 1;
                    backtrack = Some((star, star_k + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|c| *c == '*')
}

/// Returns true if `pattern` uses glob syntax understood by Redis.
///
/// A pattern without it names exactly one key.
pub fn has_wildcards(pattern: &str) -> bool {
    pattern.contains(['*', '?', '[', '\\'])
}
