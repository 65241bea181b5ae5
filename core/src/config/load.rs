use std::path::Path;

use anyhow::Context;

use super::types::Config;

const CONFIG_FILE: &str = "goed.toml";

/// Load the config: an explicit `--config` path must exist; otherwise
/// `goed.toml` in the working directory is used when present, else defaults.
/// Env vars override the file.
pub fn load(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut cfg: Config = match path {
        Some(p) => {
            let s = std::fs::read_to_string(p)
                .with_context(|| format!("cannot read config {}", p.display()))?;
            toml::from_str(&s).with_context(|| format!("cannot parse config {}", p.display()))?
        }
        None if Path::new(CONFIG_FILE).exists() => {
            let s = std::fs::read_to_string(CONFIG_FILE)?;
            toml::from_str(&s).with_context(|| format!("cannot parse {CONFIG_FILE}"))?
        }
        None => Config::default(),
    };

    if let Ok(v) = std::env::var("GOED_GURU_SCOPE") {
        if !v.trim().is_empty() {
            cfg.guru.scope = v;
        }
    }
    if let Ok(v) = std::env::var("GOED_SHARE_URL") {
        if !v.trim().is_empty() {
            cfg.share.url = v;
        }
    }

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::Path;

    use super::*;

    #[test]
    fn explicit_path_is_loaded() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "[guru]\nscope = \"example.com/m/...\"").unwrap();
        let cfg = load(Some(f.path())).unwrap();
        assert_eq!(cfg.guru.scope, "example.com/m/...");
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load(Some(Path::new("/no/such/goed.toml"))).unwrap_err();
        assert!(err.to_string().contains("cannot read config"));
    }

    #[test]
    fn env_overrides_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "[share]\nurl = \"https://from-file/share\"").unwrap();

        std::env::set_var("GOED_SHARE_URL", "https://from-env/share");
        let cfg = load(Some(f.path())).unwrap();
        std::env::remove_var("GOED_SHARE_URL");

        assert_eq!(cfg.share.url, "https://from-env/share");
    }
}
