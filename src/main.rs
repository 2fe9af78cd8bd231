mod args;
mod console;
mod context;
mod error;
mod fs;
mod package;
mod result;
mod shell;
mod utils;

use args::Args;
use console::TerminalConsole;
use context::Context;
use fs::LocalFs;
use shell::Shell;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> result::Result<()> {
    // Parse command-line arguments
    let Args {
        verbose,
        once,
        level,
        path,
    } = Args::parse();

    let ctx = Context::new(verbose, level);
    let mut console = TerminalConsole::new();
    let mut shell = Shell::new(&mut console, &LocalFs, &ctx);

    if once || path.is_some() {
        shell.run_once(path)?;
    } else {
        shell.run_menu()?;
    }

    Ok(())
}
