//! Position syntax for the external tools.
//!
//! guru and gogetdoc address bytes (`file:#start,#end`), godoctor addresses
//! 1-based line/column pairs. Offsets come from the editor and are always
//! byte-based; we never re-interpret them against the buffer's encoding.

use super::types::Selection;

impl Selection {
    /// guru position syntax: `filename:#start,#end`, collapsing to
    /// `filename:#start` for a bare cursor.
    pub fn pos(&self) -> String {
        if self.start == self.end {
            format!("{}:#{}", self.filename, self.start)
        } else {
            format!("{}:#{},#{}", self.filename, self.start, self.end)
        }
    }

    /// Single-offset position: `filename:#start` (gorename, gogetdoc).
    pub fn offset_pos(&self) -> String {
        format!("{}:#{}", self.filename, self.start)
    }

    /// godoctor position syntax: `line,col:line,col`, 1-based, columns
    /// counted in bytes within the line.
    pub fn line_col_span(&self) -> String {
        let (l1, c1) = self.line_col(self.start);
        let (l2, c2) = self.line_col(self.end);
        format!("{l1},{c1}:{l2},{c2}")
    }

    fn line_col(&self, offset: usize) -> (usize, usize) {
        let mut line = 1;
        let mut col = 1;
        for &b in &self.body[..offset] {
            if b == b'\n' {
                line += 1;
                col = 1;
            } else {
                col += 1;
            }
        }
        (line, col)
    }
}
