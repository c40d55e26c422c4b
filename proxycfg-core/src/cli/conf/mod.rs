mod check;
mod dump;
mod edit;
mod init;
#[cfg(test)]
mod tests;

pub use check::*;
pub use dump::*;
pub use edit::*;
pub use init::*;

use crate::logging::{LogMode, default_log_mode};
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfCmd {
    /// Validate a profile document and exit
    Check {
        /// Path to a JSON or YAML profile document
        path: PathBuf,

        /// Print errors as plain text
        #[arg(long, conflicts_with = "json")]
        plain: bool,

        /// Print errors as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a profile document after validation
    Dump {
        path: PathBuf,

        /// Print the flat edit map instead of the wire document
        #[arg(long)]
        flat: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Write a new minimal profile
    Init {
        /// Service name of the new profile
        name: String,

        /// Listener address as host:port
        #[arg(long, default_value = "0.0.0.0:8080")]
        address: String,

        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Edit a stored profile, or create one with --create
    Edit(EditArgs),
}

pub fn run(cmd: ConfCmd) -> anyhow::Result<()> {
    match cmd {
        ConfCmd::Check { path, plain, json } => check(path, report_mode(plain, json)),
        ConfCmd::Dump { path, flat, yaml } => dump(path, flat, yaml),
        ConfCmd::Init { name, address, out } => init(&name, &address, out),
        ConfCmd::Edit(args) => edit(args, default_log_mode()),
    }
}

fn report_mode(plain: bool, json: bool) -> LogMode {
    if json {
        LogMode::Json
    } else if plain {
        LogMode::Plain
    } else {
        default_log_mode()
    }
}
