//! guru-backed queries.
//!
//! All of these run `guru -modified <mode> <pos>` with the archive on stdin
//! so unsaved buffers are analyzed as the editor sees them. `callstack` and
//! `whicherrs` need whole-program pointer analysis and take the configured
//! `-scope` when one is set.

use crate::archive::archive;
use crate::config::Config;
use crate::error::CommandError;
use crate::runner;
use crate::selection::Selection;

pub async fn callstack(sel: &Selection, cfg: &Config) -> Result<String, CommandError> {
    query(sel, cfg, "callstack", Scope::Configured).await
}

pub async fn definition(sel: &Selection, cfg: &Config) -> Result<String, CommandError> {
    let args = build_args("definition", sel.offset_pos(), None);
    Ok(runner::run_with_stdin(&archive(sel), &cfg.tools.guru, &args).await?)
}

pub async fn describe(sel: &Selection, cfg: &Config) -> Result<String, CommandError> {
    query(sel, cfg, "describe", Scope::None).await
}

pub async fn whicherrs(sel: &Selection, cfg: &Config) -> Result<String, CommandError> {
    query(sel, cfg, "whicherrs", Scope::Configured).await
}

pub async fn freevars(sel: &Selection, cfg: &Config) -> Result<String, CommandError> {
    query(sel, cfg, "freevars", Scope::None).await
}

pub async fn implements(sel: &Selection, cfg: &Config) -> Result<String, CommandError> {
    query(sel, cfg, "implements", Scope::None).await
}

pub async fn referrers(sel: &Selection, cfg: &Config) -> Result<String, CommandError> {
    query(sel, cfg, "referrers", Scope::None).await
}

pub async fn what(sel: &Selection, cfg: &Config) -> Result<String, CommandError> {
    query(sel, cfg, "what", Scope::None).await
}

enum Scope {
    None,
    Configured,
}

async fn query(
    sel: &Selection,
    cfg: &Config,
    mode: &str,
    scope: Scope,
) -> Result<String, CommandError> {
    let scope = match scope {
        Scope::Configured if !cfg.guru.scope.is_empty() => Some(cfg.guru.scope.as_str()),
        _ => None,
    };
    let args = build_args(mode, sel.pos(), scope);
    Ok(runner::run_with_stdin(&archive(sel), &cfg.tools.guru, &args).await?)
}

fn build_args(mode: &str, pos: String, scope: Option<&str>) -> Vec<String> {
    let mut args = vec!["-modified".to_string()];
    if let Some(scope) = scope {
        args.push("-scope".to_string());
        args.push(scope.to_string());
    }
    args.push(mode.to_string());
    args.push(pos);
    args
}
