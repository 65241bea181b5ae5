use std::io::Read;

use crate::error::SelectionError;

use super::types::Selection;

impl Selection {
    /// Read a selection record to EOF and parse it.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Selection, SelectionError> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Selection::parse(&buf)
    }

    /// Parse a selection record from raw bytes.
    pub fn parse(input: &[u8]) -> Result<Selection, SelectionError> {
        let (name_line, rest) = split_line(input).ok_or(SelectionError::MissingFilename)?;
        let filename = std::str::from_utf8(name_line)
            .map_err(SelectionError::FilenameNotUtf8)?
            .trim_end_matches('\r');
        if filename.is_empty() {
            return Err(SelectionError::EmptyFilename);
        }

        let (span_line, body) = split_line(rest).ok_or(SelectionError::MissingSpan)?;
        let (start, end) = parse_span(span_line)?;

        if start > end || end > body.len() {
            return Err(SelectionError::SpanOutOfBounds {
                start,
                end,
                len: body.len(),
            });
        }

        Ok(Selection {
            filename: filename.to_string(),
            start,
            end,
            body: body.to_vec(),
        })
    }
}

/// Split off the first `\n`-terminated line. The header lines must be
/// newline-terminated so the body can start with arbitrary bytes.
fn split_line(input: &[u8]) -> Option<(&[u8], &[u8])> {
    let nl = input.iter().position(|&b| b == b'\n')?;
    Some((&input[..nl], &input[nl + 1..]))
}

fn parse_span(line: &[u8]) -> Result<(usize, usize), SelectionError> {
    let text = std::str::from_utf8(line)
        .map_err(|_| SelectionError::MalformedSpan(String::from_utf8_lossy(line).into_owned()))?;
    let malformed = || SelectionError::MalformedSpan(text.to_string());

    let mut fields = text.split_whitespace();
    let start = fields
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or_else(malformed)?;
    let end = fields
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or_else(malformed)?;
    if fields.next().is_some() {
        return Err(malformed());
    }
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_record() {
        let sel = Selection::parse(b"main.go\n4 9\npackage main\n").unwrap();
        assert_eq!(sel.filename, "main.go");
        assert_eq!((sel.start, sel.end), (4, 9));
        assert_eq!(sel.selected(), b"age m");
    }

    #[test]
    fn parse_empty_span_is_a_cursor() {
        let sel = Selection::parse(b"a.go\n3 3\nabcdef").unwrap();
        assert_eq!(sel.selected(), b"");
        assert_eq!(sel.snippet(), b"abcdef");
    }

    #[test]
    fn parse_empty_body() {
        let sel = Selection::parse(b"a.go\n0 0\n").unwrap();
        assert!(sel.body.is_empty());
    }

    #[test]
    fn parse_body_may_be_non_utf8() {
        let sel = Selection::parse(b"a.go\n0 2\n\xff\xfe\x00rest").unwrap();
        assert_eq!(sel.selected(), b"\xff\xfe");
    }

    #[test]
    fn parse_crlf_header() {
        let sel = Selection::parse(b"a.go\r\n0 1\nx").unwrap();
        assert_eq!(sel.filename, "a.go");
    }

    #[test]
    fn missing_filename_line() {
        let err = Selection::parse(b"").unwrap_err();
        assert!(matches!(err, SelectionError::MissingFilename));
    }

    #[test]
    fn empty_filename() {
        let err = Selection::parse(b"\n0 0\n").unwrap_err();
        assert!(matches!(err, SelectionError::EmptyFilename));
    }

    #[test]
    fn missing_span_line() {
        let err = Selection::parse(b"a.go\n").unwrap_err();
        assert!(matches!(err, SelectionError::MissingSpan));
    }

    #[test]
    fn malformed_span_rejects_junk() {
        for input in [
            &b"a.go\n1\nbody"[..],
            &b"a.go\nx y\nbody"[..],
            &b"a.go\n1 2 3\nbody"[..],
            &b"a.go\n-1 2\nbody"[..],
        ] {
            let err = Selection::parse(input).unwrap_err();
            assert!(matches!(err, SelectionError::MalformedSpan(_)), "{input:?}");
        }
    }

    #[test]
    fn span_out_of_bounds() {
        let err = Selection::parse(b"a.go\n0 10\nabc").unwrap_err();
        assert!(matches!(
            err,
            SelectionError::SpanOutOfBounds { end: 10, len: 3, .. }
        ));

        let err = Selection::parse(b"a.go\n5 2\nabcdef").unwrap_err();
        assert!(matches!(err, SelectionError::SpanOutOfBounds { .. }));
    }
}
