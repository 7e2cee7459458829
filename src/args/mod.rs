// Public modules
pub mod types;
pub mod validators;

pub use types::*;
pub use validators::{check_album_name, check_option_len};

use clap::Parser;
use crossterm::style::Stylize;
use std::process;

/// Parse command line arguments and validate them
///
/// Argument errors exit with code 1 like every other reported error;
/// `--help` and `--version` exit with code 0.
#[must_use]
pub fn args_checks() -> Args {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = i32::from(e.use_stderr());
            let _ = e.print();
            process::exit(code);
        }
    };

    if let Err(e) = args.validate() {
        eprintln!("{}", format!("\n{e}").red());
        process::exit(1);
    }

    args
}
