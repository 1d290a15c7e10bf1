//! Command-line driver for the vm15 interpreter.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::error;

use vm15::console::StdConsole;
use vm15::{engine, program, snapshot, VmError};

#[derive(Parser)]
#[command(name = "vm15", about = "Interpreter for a 15-bit register virtual machine")]
struct Cli {
    /// Increase log verbosity; repeat for more detail (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Write a snapshot of the final machine state to this path on exit,
    /// whether the run halted cleanly or faulted.
    #[arg(long, global = true)]
    snapshot_on_exit: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load a program image and run it from a fresh machine state.
    Load { program: PathBuf },
    /// Resume execution from a saved snapshot.
    Resume { snapshot: PathBuf },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let loaded = match &cli.command {
        Command::Load { program: path } => program::load(path),
        Command::Resume { snapshot: path } => snapshot::load(path),
    };

    let mut state = match loaded {
        Ok(state) => state,
        Err(e) => return report(&e),
    };

    let mut console = StdConsole::new();
    let (out, input) = console.split();
    let result = engine::run(&mut state, out, input);

    if let Some(path) = &cli.snapshot_on_exit {
        if let Err(e) = snapshot::save(&state, path) {
            error!("failed to write exit snapshot to {}: {e}", path.display());
        }
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn report(e: &VmError) -> ExitCode {
    error!("{e}");
    ExitCode::from(e.exit_code() as u8)
}
