//! Helpers for ordering collections of version strings.

use crate::{ParsedVersion, compare, parse};

/// Sorts version strings from lowest to highest precedence.
///
/// Each string is parsed once. The sort is stable, so versions with equal
/// precedence (`1.0` and `1.0.0`) keep their relative order.
pub fn sort_versions<S: AsRef<str>>(versions: &mut [S]) {
    versions.sort_by_cached_key(|v| ByPrecedence(parse(v.as_ref())));
}

/// Parses every version and returns them from lowest to highest precedence.
pub fn sorted_versions<I>(versions: I) -> Vec<ParsedVersion>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut parsed: Vec<_> = versions.into_iter().map(|v| parse(v.as_ref())).collect();
    parsed.sort_by(compare);
    parsed
}

/// Returns the version with the highest precedence. Among versions with equal
/// precedence, the last one wins.
pub fn newest<I>(versions: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    versions
        .into_iter()
        .map(|v| {
            let parsed = parse(v.as_ref());
            (v, parsed)
        })
        .max_by(|(_, a), (_, b)| compare(a, b))
        .map(|(v, _)| v)
}

/// Parallel version of [`sort_versions`].
#[cfg(feature = "rayon")]
pub fn par_sort_versions<S: AsRef<str> + Send>(versions: &mut [S]) {
    use rayon::prelude::*;

    versions.par_sort_by_cached_key(|v| ByPrecedence(parse(v.as_ref())));
}

/// Sort key wrapper whose `Ord` is version precedence.
struct ByPrecedence(ParsedVersion);

impl PartialEq for ByPrecedence {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for ByPrecedence {}

impl PartialOrd for ByPrecedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByPrecedence {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        compare(&self.0, &other.0)
    }
}
