//! Lenient parsing and ordering of semver-like version strings.
//!
//! Versions are never rejected. Missing components count as zero, a `-`
//! suffix marks a pre-release that sorts below its release, and a letter
//! suffix directly after the core (`1.0.0a`) marks a post-release that sorts
//! above it.
//!
//! ```
//! use std::cmp::Ordering;
//!
//! assert_eq!(versionsort::compare_versions("1.10", "1.6"), Ordering::Greater);
//! assert_eq!(versionsort::compare_versions("1.0", "1.0.0"), Ordering::Equal);
//! assert_eq!(versionsort::compare_versions("1.0.0-alpha", "1.0.0"), Ordering::Less);
//! assert_eq!(versionsort::compare_versions("1.0.0a", "1.0.0"), Ordering::Greater);
//! ```

pub mod comparator;
mod parser;
pub mod sort;

use std::cmp::Ordering;

pub use comparator::compare;
pub use parser::{ParsedVersion, parse};
#[cfg(feature = "rayon")]
pub use sort::par_sort_versions;
pub use sort::{newest, sort_versions, sorted_versions};

/// Parses both strings and orders them by precedence.
///
/// Works directly as a `sort_by` comparator:
///
/// ```
/// let mut versions = vec!["1.0.0", "1.0.0-beta", "0.9"];
/// versions.sort_by(|a, b| versionsort::compare_versions(a, b));
/// assert_eq!(versions, ["0.9", "1.0.0-beta", "1.0.0"]);
/// ```
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    compare(&parse(a), &parse(b))
}
