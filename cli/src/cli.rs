use std::path::PathBuf;

use clap::{Parser, Subcommand};

use goed_core::commands::Command;

/// Editor-integration dispatcher for Go source-analysis tools.
///
/// Reads a selection record on stdin (`<filename>\n<start> <end>\n<body>`),
/// runs the external tool for the given command, and prints its output.
#[derive(Parser, Debug, Clone)]
#[command(name = "goed", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to ./goed.toml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the path from the callgraph root to the selected function
    Cs,
    /// Show the declaration of the selected identifier
    Def,
    /// Describe the selected syntax: definition, methods, etc.
    Desc,
    /// Show documentation for the item under the selection
    Doc,
    /// Show possible values of the selected error variable
    Err,
    /// Extract the selected statements to a new function/method
    Ex {
        /// Name for the extracted function
        name: String,
    },
    /// Show free variables of the selection
    Fv,
    /// Generate method stubs for implementing the selected interface
    Impl {
        /// Receiver, e.g. `f` `*File`
        #[arg(required = true)]
        receiver: Vec<String>,
    },
    /// Show the 'implements' relation for the selected type or method
    Impls,
    /// Show all references to the selected identifier
    Refs,
    /// Rename the selected identifier
    Rn {
        /// New name
        to: String,
    },
    /// Upload the selected code to the playground
    Share,
    /// Show basic information about the selected syntax node
    What,
}

impl From<Commands> for Command {
    fn from(cmd: Commands) -> Self {
        match cmd {
            Commands::Cs => Command::Callstack,
            Commands::Def => Command::Definition,
            Commands::Desc => Command::Describe,
            Commands::Doc => Command::Doc,
            Commands::Err => Command::WhichErrs,
            Commands::Ex { name } => Command::Extract { name },
            Commands::Fv => Command::FreeVars,
            Commands::Impl { receiver } => Command::Impl { receiver },
            Commands::Impls => Command::Implements,
            Commands::Refs => Command::Referrers,
            Commands::Rn { to } => Command::Rename { to },
            Commands::Share => Command::Share,
            Commands::What => Command::What,
        }
    }
}
