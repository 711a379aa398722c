//! Thin binary entry point: the CLI lives in `src/cli/`, this file only
//! invokes it and turns an error into a nonzero exit.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
