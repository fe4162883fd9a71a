//! Marker-delimited span matching.
//!
//! The scan is greedy, leftmost and non-overlapping: each search for a start
//! marker begins at the end of the previous span, and the first stop marker
//! after the start marker closes the span. Once a stop marker can no longer be
//! found the whole scan ends, even if more start markers follow.

use memchr::memmem::Finder;

/// Default minimum span length (inclusive).
pub const DEFAULT_MIN_LENGTH: usize = 400;

/// Default maximum span length (inclusive).
pub const DEFAULT_MAX_LENGTH: usize = 500;

/// A span accepted by the length filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceMatch {
    /// Byte offset of the span in the sequence buffer.
    pub start: usize,
    /// The span, start and stop markers included.
    pub sequence: String,
    /// Span length in characters.
    pub length: usize,
}

impl SequenceMatch {
    /// Byte offset one past the end of the span.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.sequence.len()
    }
}

/// Byte range of a start..stop candidate, before length filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Precompiled start/stop marker search with an inclusive length range.
#[derive(Debug, Clone)]
pub struct Matcher {
    start_marker: Finder<'static>,
    stop_marker: Finder<'static>,
    /// Minimum accepted span length (inclusive)
    pub min_length: usize,
    /// Maximum accepted span length (inclusive)
    pub max_length: usize,
}

impl Matcher {
    /// Create a matcher with the default 400..=500 length range.
    pub fn new(start_marker: &str, stop_marker: &str) -> Self {
        Self {
            start_marker: Finder::new(start_marker.as_bytes()).into_owned(),
            stop_marker: Finder::new(stop_marker.as_bytes()).into_owned(),
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    /// Set the accepted length range. `min > max` accepts nothing.
    pub fn with_length_range(mut self, min_length: usize, max_length: usize) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    /// True when both markers are empty and every position yields an empty span.
    pub fn is_degenerate(&self) -> bool {
        self.start_marker.needle().is_empty() && self.stop_marker.needle().is_empty()
    }

    /// Iterate over every start..stop candidate in `buffer`, left to right.
    pub fn spans<'a>(&'a self, buffer: &'a str) -> Spans<'a> {
        Spans {
            matcher: self,
            buffer,
            cursor: 0,
        }
    }

    /// Collect the candidates whose length lies within the configured range.
    pub fn find_all(&self, buffer: &str) -> Vec<SequenceMatch> {
        self.spans(buffer)
            .filter_map(|span| {
                let sequence = &buffer[span.start..span.end];
                let length = sequence.chars().count();
                (self.min_length <= length && length <= self.max_length).then(|| SequenceMatch {
                    start: span.start,
                    sequence: sequence.to_string(),
                    length,
                })
            })
            .collect()
    }
}

/// Iterator over start..stop candidates. See [`Matcher::spans`].
pub struct Spans<'a> {
    matcher: &'a Matcher,
    buffer: &'a str,
    cursor: usize,
}

impl Spans<'_> {
    fn exhaust(&mut self) -> Option<Span> {
        self.cursor = self.buffer.len();
        None
    }
}

impl Iterator for Spans<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let haystack = self.buffer.as_bytes();
        if self.cursor >= haystack.len() {
            return None;
        }

        let start = match self.matcher.start_marker.find(&haystack[self.cursor..]) {
            Some(offset) => self.cursor + offset,
            None => return self.exhaust(),
        };

        let after_start = start + self.matcher.start_marker.needle().len();
        let stop = match self.matcher.stop_marker.find(&haystack[after_start..]) {
            Some(offset) => after_start + offset,
            None => return self.exhaust(),
        };

        let end = stop + self.matcher.stop_marker.needle().len();

        // An empty span at the cursor would never move it; step one character.
        self.cursor = if end > self.cursor {
            end
        } else {
            let step = self.buffer[self.cursor..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            self.cursor + step
        };

        Some(Span { start, end })
    }
}

impl std::iter::FusedIterator for Spans<'_> {}

/// Find all non-overlapping `start_marker..stop_marker` spans of `buffer`
/// whose length lies in `min_length..=max_length`.
pub fn find_matches(
    buffer: &str,
    start_marker: &str,
    stop_marker: &str,
    min_length: usize,
    max_length: usize,
) -> Vec<SequenceMatch> {
    Matcher::new(start_marker, stop_marker)
        .with_length_range(min_length, max_length)
        .find_all(buffer)
}
