//! The modified-file archive envelope.
//!
//! Tools that accept unsaved buffers (`guru -modified`, `gogetdoc -modified`)
//! read this envelope on stdin:
//!
//! ```text
//! <filename>\n
//! <decimal byte length of body>\n
//! <body bytes>
//! ```

use crate::selection::Selection;

pub fn archive(sel: &Selection) -> Vec<u8> {
    let len_line = sel.body.len().to_string();
    let mut buf = Vec::with_capacity(sel.filename.len() + len_line.len() + sel.body.len() + 2);
    buf.extend_from_slice(sel.filename.as_bytes());
    buf.push(b'\n');
    buf.extend_from_slice(len_line.as_bytes());
    buf.push(b'\n');
    buf.extend_from_slice(&sel.body);
    buf
}
