//! Line lookup for spans.
//!
//! For repeated lookups on the same source, use [`LineOffsetTable`] which
//! pre-computes line offsets for O(log L) lookup instead of O(n) scanning.

/// Pre-computed line offset table.
///
/// ```
/// use armspec_diagnostic::span_utils::LineOffsetTable;
///
/// let table = LineOffsetTable::build("a\nb\nc");
/// assert_eq!(table.line_from_offset(0), 1);
/// assert_eq!(table.line_from_offset(2), 2);
/// assert_eq!(table.line_from_offset(4), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start. `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build a line offset table from source text.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// Get the 1-based line number containing a byte offset.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx + 1).unwrap_or(u32::MAX)
    }

    /// Number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}
