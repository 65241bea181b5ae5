//! The command set and its dispatch.
//!
//! Every editor command maps to one handler; handlers format arguments from
//! the selection and hand off to an external tool. Output comes back as a
//! string for the CLI to print verbatim.

mod guru;
mod tools;

use crate::config::Config;
use crate::error::CommandError;
use crate::selection::Selection;
use crate::share;

/// An editor command, with any extra arguments it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// cs: path from the callgraph root to the selected function.
    Callstack,
    /// def: declaration of the selected identifier.
    Definition,
    /// desc: describe the selected syntax: definition, methods, etc.
    Describe,
    /// doc: documentation for the item under the selection.
    Doc,
    /// err: possible values of the selected error variable.
    WhichErrs,
    /// ex: extract the selected statements to a new function/method.
    Extract { name: String },
    /// fv: free variables of the selection.
    FreeVars,
    /// impl: method stubs for implementing the selected interface.
    Impl { receiver: Vec<String> },
    /// impls: the 'implements' relation for the selected type or method.
    Implements,
    /// refs: all references to the selected identifier.
    Referrers,
    /// rn: rename the selected identifier.
    Rename { to: String },
    /// share: upload the selected code to the playground.
    Share,
    /// what: basic information about the selected syntax node.
    What,
}

pub async fn dispatch(
    cmd: Command,
    sel: &Selection,
    cfg: &Config,
) -> Result<String, CommandError> {
    match cmd {
        Command::Callstack => guru::callstack(sel, cfg).await,
        Command::Definition => guru::definition(sel, cfg).await,
        Command::Describe => guru::describe(sel, cfg).await,
        Command::Doc => tools::doc(sel, cfg).await,
        Command::WhichErrs => guru::whicherrs(sel, cfg).await,
        Command::Extract { name } => tools::extract(sel, cfg, &name).await,
        Command::FreeVars => guru::freevars(sel, cfg).await,
        Command::Impl { receiver } => tools::impl_stubs(sel, cfg, &receiver).await,
        Command::Implements => guru::implements(sel, cfg).await,
        Command::Referrers => guru::referrers(sel, cfg).await,
        Command::Rename { to } => tools::rename(sel, cfg, &to).await,
        Command::Share => {
            let url = share::share(sel.snippet(), &cfg.share).await?;
            Ok(format!("{url}\n"))
        }
        Command::What => guru::what(sel, cfg).await,
    }
}
