//! Core logic for goed: selection parsing, the archive envelope, config,
//! the external tool runner, and the command handlers.

pub mod archive;
pub mod commands;
pub mod config;
pub mod error;
pub mod runner;
pub mod selection;
pub mod share;
