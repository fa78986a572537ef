use std::{convert::Infallible, str::FromStr};

/// A version string split into its core, pre-release and post-release parts.
///
/// Parsing never fails: every string maps to some `ParsedVersion`, and the
/// input is kept verbatim for display. Segments are stored as raw text; any
/// numeric interpretation happens at comparison time.
///
/// Equality is textual. Two versions with equal precedence, like `1.0` and
/// `1.0.0`, are still different values, which is why there is no `Ord` impl.
/// Use [`ParsedVersion::compare_precedence`] to order versions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
pub struct ParsedVersion {
    original: String,
    core: Vec<String>,
    pre_release: Vec<String>,
    post_release: Vec<String>,
    is_pre_release: bool,
}

impl ParsedVersion {
    /// Same as [`parse`].
    pub fn new(version: impl AsRef<str>) -> Self {
        parse(version.as_ref())
    }

    /// The input this version was parsed from, unchanged.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// The dot-separated segments before any pre-release or post-release
    /// marker. Never empty.
    pub fn core_segments(&self) -> &[String] {
        &self.core
    }

    /// The dot-separated segments after the first `-`.
    pub fn pre_release_segments(&self) -> &[String] {
        &self.pre_release
    }

    /// The dot-separated segments starting at the first letter before any `-`.
    pub fn post_release_segments(&self) -> &[String] {
        &self.post_release
    }

    /// Whether the input contained a `-`, even with nothing after it.
    pub fn is_pre_release(&self) -> bool {
        self.is_pre_release
    }

    /// Whether a letter suffix follows the core, as in `1.0.0a`.
    pub fn has_post_release(&self) -> bool {
        !self.post_release.is_empty()
    }

    /// Orders by precedence; see [`crate::compare`].
    pub fn compare_precedence(&self, other: &Self) -> std::cmp::Ordering {
        crate::comparator::compare(self, other)
    }
}

/// Parses a version string, on a best-effort basis.
///
/// `1.2.3a.1-rc.4` splits into core `[1, 2, 3]`, post-release `[a, 1]` and
/// pre-release `[rc, 4]`. Digits following a letter stay attached to it, so
/// `1.0.0a1` has the single post-release segment `a1`.
pub fn parse(version: &str) -> ParsedVersion {
    let (core_part, pre_release) = match version.split_once('-') {
        Some((core_part, extra)) => (core_part, Some(extra)),
        None => (version, None),
    };

    let (core, post) = split_at_first_letter(core_part);

    let parsed = ParsedVersion {
        original: version.to_owned(),
        core: core.split('.').map(str::to_owned).collect(),
        pre_release: pre_release.map(split_segments).unwrap_or_default(),
        post_release: if post.is_empty() {
            Vec::new()
        } else {
            split_segments(post)
        },
        is_pre_release: pre_release.is_some(),
    };

    tracing::trace!(
        version,
        core = ?parsed.core,
        pre_release = ?parsed.pre_release,
        post_release = ?parsed.post_release,
        "parsed version"
    );

    parsed
}

/// Everything before the first ASCII letter, and everything from it onward.
fn split_at_first_letter(s: &str) -> (&str, &str) {
    let index = s
        .char_indices()
        .find(|(_, c)| c.is_ascii_alphabetic())
        .map_or(s.len(), |(i, _)| i);
    s.split_at(index)
}

/// Splits identifiers on `.`, dropping trailing empty ones. An empty input
/// yields a single empty identifier, and an input of only dots yields none.
fn split_segments(s: &str) -> Vec<String> {
    if s.is_empty() {
        return vec![String::new()];
    }

    let mut segments: Vec<String> = s.split('.').map(str::to_owned).collect();
    while segments.last().is_some_and(String::is_empty) {
        segments.pop();
    }
    segments
}

impl FromStr for ParsedVersion {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse(s))
    }
}

impl From<&str> for ParsedVersion {
    fn from(s: &str) -> Self {
        parse(s)
    }
}

impl From<String> for ParsedVersion {
    fn from(s: String) -> Self {
        parse(&s)
    }
}

impl AsRef<str> for ParsedVersion {
    fn as_ref(&self) -> &str {
        &self.original
    }
}

impl std::fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.original)
    }
}
