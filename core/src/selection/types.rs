#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub filename: String,
    pub start: usize,
    pub end: usize,
    pub body: Vec<u8>,
}

impl Selection {
    /// The selected bytes, `body[start..end]`.
    pub fn selected(&self) -> &[u8] {
        &self.body[self.start..self.end]
    }

    /// The selected bytes decoded as text, for handlers that need the
    /// selected token as a string argument (e.g. an interface name).
    pub fn text(&self) -> String {
        String::from_utf8_lossy(self.selected()).into_owned()
    }

    /// The payload to share: the selected span, or the whole buffer when
    /// the selection is a bare cursor.
    pub fn snippet(&self) -> &[u8] {
        if self.start == self.end {
            &self.body
        } else {
            self.selected()
        }
    }
}
