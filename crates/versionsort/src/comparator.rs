use std::cmp::Ordering;

use crate::ParsedVersion;

/// Orders two versions by precedence.
///
/// Core segments are compared numerically, with missing segments counting as
/// zero. With equal cores, a pre-release sorts below the release and a
/// post-release suffix sorts above it. Pre-release and post-release segments
/// are compared with [`compare_segments`].
pub fn compare(a: &ParsedVersion, b: &ParsedVersion) -> Ordering {
    compare_core(a.core_segments(), b.core_segments())
        .then_with(|| match (a.is_pre_release(), b.is_pre_release()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (true, true) => compare_segments(a.pre_release_segments(), b.pre_release_segments()),
            (false, false) => Ordering::Equal,
        })
        .then_with(|| compare_segments(a.post_release_segments(), b.post_release_segments()))
}

fn compare_core(a: &[String], b: &[String]) -> Ordering {
    let max_len = a.len().max(b.len());

    for i in 0..max_len {
        let a_part = a.get(i).map_or(0, |s| parse_or_zero(s));
        let b_part = b.get(i).map_or(0, |s| parse_or_zero(s));

        match a_part.cmp(&b_part) {
            Ordering::Equal => continue,
            other => return other,
        }
    }

    Ordering::Equal
}

/// Reads a core segment as a 32-bit number. Anything that isn't one,
/// including values past `i32::MAX`, counts as zero.
pub fn parse_or_zero(segment: &str) -> i32 {
    segment.parse().unwrap_or_else(|_| {
        tracing::trace!(segment, "non-numeric core segment, treating as 0");
        0
    })
}

/// Compares dot-separated pre-release or post-release identifiers.
///
/// A missing identifier sorts first, so `alpha` < `alpha.1`. Numeric
/// identifiers compare by value and always sort before alphanumeric ones,
/// which compare as plain strings.
pub fn compare_segments(a: &[String], b: &[String]) -> Ordering {
    let max_len = a.len().max(b.len());

    for i in 0..max_len {
        let (a_part, b_part) = match (a.get(i), b.get(i)) {
            (None, _) => return Ordering::Less,
            (_, None) => return Ordering::Greater,
            (Some(a_part), Some(b_part)) => (a_part, b_part),
        };

        let ordering = match (is_numeric(a_part), is_numeric(b_part)) {
            (true, true) => compare_numeric(a_part, b_part),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => a_part.cmp(b_part),
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}

fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Compares two all-digit strings by value, without a width limit.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
