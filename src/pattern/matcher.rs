//! # Wildcard matching over delimiter-segmented names.
//!
//! A subscription name is split into segments by the hub's delimiter and
//! parsed once at registration. Two wildcard tokens are recognized:
//! - `*` matches exactly one segment of any text;
//! - `**` matches zero or more segments.
//!
//! A name matches when every literal segment compares equal and, absent
//! `**`, the segment counts are equal.
//!
//! # Example
//! ```rust
//! use notihub::Pattern;
//!
//! let pat = Pattern::parse("job.*.done", ".");
//! assert!(pat.matches("job.backup.done", "."));
//! assert!(!pat.matches("job.backup.failed", "."));
//! assert!(!pat.matches("job.done", "."));
//!
//! let deep = Pattern::parse("job.**", ".");
//! assert!(deep.matches("job", "."));
//! assert!(deep.matches("job.backup.done", "."));
//! ```

/// One parsed segment of a subscription pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    /// Matches one segment with exactly this text.
    Literal(String),
    /// `*`: matches exactly one segment of any text.
    One,
    /// `**`: matches zero or more segments.
    Any,
}

/// A subscription pattern parsed against a fixed delimiter.
///
/// Parsing never fails: a name without wildcard tokens is a pattern of
/// literal segments and matches only itself.
#[derive(Clone, Debug)]
pub struct Pattern {
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parses `name` into a pattern using `delimiter` to split segments.
    ///
    /// An empty delimiter disables segmentation: the whole name becomes a
    /// single literal segment.
    #[must_use]
    pub fn parse(name: &str, delimiter: &str) -> Self {
        let segments = split_segments(name, delimiter)
            .into_iter()
            .map(|s| match s {
                "*" => Segment::One,
                "**" => Segment::Any,
                lit => Segment::Literal(lit.to_string()),
            })
            .collect();
        Self { segments }
    }

    /// True when the pattern contains no wildcard segments.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Literal(_)))
    }

    /// Matches an emitted name, splitting it with `delimiter`.
    #[must_use]
    pub fn matches(&self, name: &str, delimiter: &str) -> bool {
        self.matches_segments(&split_segments(name, delimiter))
    }

    /// Matches an already-split emitted name.
    pub(crate) fn matches_segments(&self, segments: &[&str]) -> bool {
        match_from(&self.segments, segments)
    }
}

/// Splits an event name into delimiter-separated segments.
///
/// An empty delimiter yields the whole name as a single segment.
pub(crate) fn split_segments<'a>(name: &'a str, delimiter: &str) -> Vec<&'a str> {
    if delimiter.is_empty() {
        vec![name]
    } else {
        name.split(delimiter).collect()
    }
}

fn match_from(pattern: &[Segment], segments: &[&str]) -> bool {
    match pattern.first() {
        None => segments.is_empty(),
        Some(Segment::Any) => {
            // `**` absorbs zero or more leading segments.
            (0..=segments.len()).any(|n| match_from(&pattern[1..], &segments[n..]))
        }
        Some(Segment::One) => {
            !segments.is_empty() && match_from(&pattern[1..], &segments[1..])
        }
        Some(Segment::Literal(lit)) => {
            segments.first().is_some_and(|s| *s == lit.as_str())
                && match_from(&pattern[1..], &segments[1..])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_pattern_matches_only_itself() {
        let pat = Pattern::parse("job.done", ".");
        assert!(pat.is_exact());
        assert!(pat.matches("job.done", "."));
        assert!(!pat.matches("job.failed", "."));
        assert!(!pat.matches("job", "."));
        assert!(!pat.matches("job.done.extra", "."));
    }

    #[test]
    fn test_star_matches_exactly_one_segment() {
        let pat = Pattern::parse("job.*", ".");
        assert!(!pat.is_exact());
        assert!(pat.matches("job.done", "."));
        assert!(pat.matches("job.failed", "."));
        assert!(!pat.matches("job", "."));
        assert!(!pat.matches("job.done.extra", "."));
    }

    #[test]
    fn test_star_in_the_middle() {
        let pat = Pattern::parse("a.*.c", ".");
        assert!(pat.matches("a.b.c", "."));
        assert!(pat.matches("a.x.c", "."));
        assert!(!pat.matches("a.b.d", "."));
        assert!(!pat.matches("a.c", "."));
        assert!(!pat.matches("a.b.b.c", "."));
    }

    #[test]
    fn test_double_star_matches_zero_or_more_segments() {
        let pat = Pattern::parse("job.**", ".");
        assert!(pat.matches("job", "."));
        assert!(pat.matches("job.done", "."));
        assert!(pat.matches("job.backup.done", "."));
        assert!(!pat.matches("task.done", "."));
    }

    #[test]
    fn test_double_star_in_the_middle() {
        let pat = Pattern::parse("a.**.z", ".");
        assert!(pat.matches("a.z", "."));
        assert!(pat.matches("a.b.z", "."));
        assert!(pat.matches("a.b.c.z", "."));
        assert!(!pat.matches("a.b.c", "."));
    }

    #[test]
    fn test_bare_double_star_matches_everything() {
        let pat = Pattern::parse("**", ".");
        assert!(pat.matches("a", "."));
        assert!(pat.matches("a.b.c", "."));
    }

    #[test]
    fn test_multi_character_delimiter() {
        let pat = Pattern::parse("alpha::::*", "::::");
        assert!(pat.matches("alpha::::beta", "::::"));
        assert!(!pat.matches("alpha::::beta::::gamma", "::::"));
        // With a different delimiter the same text is one literal segment.
        let literal = Pattern::parse("alpha::::*", ".");
        assert!(literal.matches("alpha::::*", "."));
        assert!(!literal.matches("alpha::::beta", "."));
    }

    #[test]
    fn test_empty_delimiter_disables_segmentation() {
        let pat = Pattern::parse("a.b", "");
        assert!(pat.matches("a.b", ""));
        assert!(!pat.matches("a", ""));
        assert_eq!(split_segments("a.b.c", ""), vec!["a.b.c"]);
    }

    #[test]
    fn test_star_token_is_literal_inside_a_segment() {
        // Only a whole segment equal to `*` is a wildcard.
        let pat = Pattern::parse("job.a*b", ".");
        assert!(pat.matches("job.a*b", "."));
        assert!(!pat.matches("job.axb", "."));
    }
}
