//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use drape_cli::CliError;

fn main() {
    match drape_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("drape: {err}");
            std::process::exit(1);
        }
    }
}
