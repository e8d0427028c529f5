//! Byte spans into marked-up pseudocode.
//!
//! The markup pass keeps every newline, so an offset into the marked text
//! maps to the same source line as the original; diagnostics resolve lines
//! through `LineOffsetTable` and never need columns.

use std::fmt;

/// Half-open byte range `start..end` in the marked-up text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Span for nodes with no source text of their own.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// From a lexer range. Template bodies are far below 4 GiB; offsets past
    /// `u32::MAX` saturate.
    #[inline]
    pub fn from_range(range: std::ops::Range<usize>) -> Self {
        Span {
            start: u32::try_from(range.start).unwrap_or(u32::MAX),
            end: u32::try_from(range.end).unwrap_or(u32::MAX),
        }
    }

    /// Zero-length span, used for end of input.
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Smallest span covering both, e.g. a statement from keyword to `;`.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_covers_statement() {
        let keyword = Span::new(10, 12);
        let semicolon = Span::new(30, 31);
        assert_eq!(keyword.merge(semicolon), Span::new(10, 31));
        assert_eq!(semicolon.merge(keyword), Span::new(10, 31));
    }

    #[test]
    fn test_from_range_saturates() {
        let span = Span::from_range(4..usize::MAX);
        assert_eq!(span, Span::new(4, u32::MAX));
    }

    #[test]
    fn test_point_and_display() {
        assert_eq!(Span::point(7), Span::new(7, 7));
        assert_eq!(format!("{:?}", Span::new(3, 9)), "3..9");
    }
}
