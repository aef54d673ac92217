//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use supplymatch_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    match supplymatch_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("supplymatch: {err}");
            std::process::exit(1);
        }
    }
}
