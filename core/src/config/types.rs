use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub guru: GuruConfig,

    #[serde(default)]
    pub share: ShareConfig,
}

/// Names (or paths) of the external tool binaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_guru")]
    pub guru: String,

    #[serde(default = "default_gorename")]
    pub gorename: String,

    #[serde(default = "default_gogetdoc")]
    pub gogetdoc: String,

    #[serde(default = "default_godoctor")]
    pub godoctor: String,

    #[serde(default = "default_impl")]
    pub r#impl: String,
}

fn default_guru() -> String {
    "guru".to_string()
}

fn default_gorename() -> String {
    "gorename".to_string()
}

fn default_gogetdoc() -> String {
    "gogetdoc".to_string()
}

fn default_godoctor() -> String {
    "godoctor".to_string()
}

fn default_impl() -> String {
    "impl".to_string()
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            guru: default_guru(),
            gorename: default_gorename(),
            gogetdoc: default_gogetdoc(),
            godoctor: default_godoctor(),
            r#impl: default_impl(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuruConfig {
    /// Comma-separated package patterns for guru's pointer analysis.
    /// Empty means no `-scope` flag is passed.
    #[serde(default)]
    pub scope: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    #[serde(default = "default_share_url")]
    pub url: String,

    #[serde(default = "default_share_base")]
    pub base: String,
}

fn default_share_url() -> String {
    "https://play.golang.org/share".to_string()
}

fn default_share_base() -> String {
    "https://play.golang.org/p/".to_string()
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            url: default_share_url(),
            base: default_share_base(),
        }
    }
}
