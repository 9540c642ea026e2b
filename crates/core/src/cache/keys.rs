use sha2::{Digest, Sha256};

use super::{CallArgs, CaseFolding};

/// Namespace shared by every key this application writes.
pub const KEY_NAMESPACE: &str = "movie_cache";

/// Number of hex characters kept from the argument digest (128 bits).
pub const DIGEST_HEX_LEN: usize = 32;

/// Returns the pattern matching every key in the application namespace.
pub fn namespace_pattern() -> String {
    format!("{KEY_NAMESPACE}:*")
}

/// Returns the pattern matching every key written for one operation prefix.
pub fn prefix_pattern(prefix: &str) -> String {
    format!("{KEY_NAMESPACE}:{prefix}:*")
}

/// Derives the cache key for a call to the operation identified by `prefix`.
///
/// The key is `movie_cache:{prefix}:{digest}` where `digest` is the first
/// [`DIGEST_HEX_LEN`] hex characters of `sha256("{prefix}:{canonical args}")`.
/// The prefix is hashed as well as prepended, so two operations never share a
/// key even if their digests were to collide.
///
/// # Examples
///
/// ```
/// use moviecache_core::cache::{derive_key, CallArgs, CaseFolding};
///
/// let args = CallArgs::new().arg("batman").unwrap();
/// let key = derive_key("title", &args, CaseFolding::Preserve);
///
/// assert!(key.starts_with("movie_cache:title:"));
/// assert_eq!(key, derive_key("title", &args, CaseFolding::Preserve));
/// assert_ne!(key, derive_key("director", &args, CaseFolding::Preserve));
/// ```
pub fn derive_key(prefix: &str, args: &CallArgs, case_folding: CaseFolding) -> String {
    let canonical = args.canonical(case_folding);

    let mut hasher = Sha256::new();
    hasher.update(prefix.as_bytes());
    hasher.update(b":");
    hasher.update(canonical.as_bytes());
    let digest = hex::encode(hasher.finalize());

    format!("{KEY_NAMESPACE}:{prefix}:{}", &digest[..DIGEST_HEX_LEN])
}
