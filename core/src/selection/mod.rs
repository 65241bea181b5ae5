//! The selection record an editor hands us on standard input.
//!
//! Wire format: a two-line header followed by the raw buffer bytes.
//!
//! ```text
//! <filename>\n
//! <start> <end>\n
//! <body bytes until EOF>
//! ```
//!
//! `start..end` is a byte span into `body`. The body is the editor's full
//! (possibly unsaved) buffer and is carried verbatim; it is not required to
//! be valid UTF-8.

mod parser;
mod pos;
mod types;

pub use types::Selection;
