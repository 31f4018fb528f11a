use rustpython_ast::TextSize;

/// A utility struct to convert byte offsets to line numbers.
///
/// This is necessary because the AST parser works with byte offsets,
/// but issues are reported with line numbers which are more human-readable.
pub struct LineIndex {
    /// Stores the byte index of the start of each line.
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Creates a new `LineIndex` by scanning the source code for newlines.
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        // Each newline marks the start of the following line.
        for (idx, _) in source.match_indices('\n') {
            line_starts.push(idx + 1);
        }
        Self { line_starts }
    }

    /// Converts a `TextSize` (byte offset) to a 1-indexed line number.
    pub fn line_index(&self, offset: TextSize) -> usize {
        let offset = offset.to_usize();
        // Binary search to find which line range the offset falls into.
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_to_line_mapping() {
        let source = "first\nsecond\nthird\n";

        let index = LineIndex::new(source);

        // "first" starts at offset 0, "second" at 6, "third" at 13.
        assert_eq!(index.line_index(TextSize::from(0)), 1);
        assert_eq!(index.line_index(TextSize::from(3)), 1);
        assert_eq!(index.line_index(TextSize::from(6)), 2);
        assert_eq!(index.line_index(TextSize::from(13)), 3);
    }

    #[test]
    fn test_offset_in_single_line_source() {
        let index = LineIndex::new("no newline here");
        assert_eq!(index.line_index(TextSize::from(0)), 1);
        assert_eq!(index.line_index(TextSize::from(10)), 1);
    }
}
