//! Handlers backed by tools other than guru: gogetdoc, gorename, godoctor
//! and impl.

use crate::archive::archive;
use crate::config::Config;
use crate::error::CommandError;
use crate::runner;
use crate::selection::Selection;

/// `gogetdoc -modified -pos <file>:#<offset>` with the archive on stdin.
pub async fn doc(sel: &Selection, cfg: &Config) -> Result<String, CommandError> {
    let args = vec![
        "-modified".to_string(),
        "-pos".to_string(),
        sel.offset_pos(),
    ];
    Ok(runner::run_with_stdin(&archive(sel), &cfg.tools.gogetdoc, &args).await?)
}

/// `gorename -offset <file>:#<offset> -to <name>`. gorename works on saved
/// files; it takes no archive.
pub async fn rename(sel: &Selection, cfg: &Config, to: &str) -> Result<String, CommandError> {
    let args = vec![
        "-offset".to_string(),
        sel.offset_pos(),
        "-to".to_string(),
        to.to_string(),
    ];
    Ok(runner::run(&cfg.tools.gorename, &args).await?)
}

/// `godoctor -file <file> -pos <line,col:line,col> extract <name>`.
pub async fn extract(sel: &Selection, cfg: &Config, name: &str) -> Result<String, CommandError> {
    let args = vec![
        "-file".to_string(),
        sel.filename.clone(),
        "-pos".to_string(),
        sel.line_col_span(),
        "extract".to_string(),
        name.to_string(),
    ];
    Ok(runner::run(&cfg.tools.godoctor, &args).await?)
}

/// `impl <receiver...> <interface>`, where the interface name is the
/// selected text.
pub async fn impl_stubs(
    sel: &Selection,
    cfg: &Config,
    receiver: &[String],
) -> Result<String, CommandError> {
    let iface = sel.text();
    if iface.trim().is_empty() {
        return Err(CommandError::EmptySelection);
    }
    let mut args = receiver.to_vec();
    args.push(iface.trim().to_string());
    Ok(runner::run(&cfg.tools.r#impl, &args).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn sel(start: usize, end: usize, body: &[u8]) -> Selection {
        Selection {
            filename: "main.go".to_string(),
            start,
            end,
            body: body.to_vec(),
        }
    }

    #[tokio::test]
    async fn impl_with_empty_selection_is_a_usage_error() {
        let s = sel(3, 3, b"package main\n");
        let err = impl_stubs(&s, &Config::default(), &["f *File".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, CommandError::EmptySelection));
    }

    #[tokio::test]
    async fn impl_with_whitespace_selection_is_a_usage_error() {
        let s = sel(7, 8, b"package main\n");
        let err = impl_stubs(&s, &Config::default(), &["f *File".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, CommandError::EmptySelection));
    }
}
