use clap::{Parser, Subcommand};
use proxycfg_core::cli;
use proxycfg_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "proxycfg",
    version,
    about = "proxycfg: edit and validate L4 proxy profiles"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Profile tooling
    Conf {
        #[command(subcommand)]
        cmd: cli::conf::ConfCmd,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Command::Conf { cmd } => {
            if let Err(e) = cli::conf::run(cmd) {
                eprintln!("error: {e:#}");
                std::process::exit(1);
            }
        }
    }
}
