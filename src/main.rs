use cloudphoto::{CommandOutcome, args, run_app};
use crossterm::style::Stylize;

fn main() {
    // Parse and validate command-line arguments
    let args = args::args_checks();

    match run_app(&args) {
        Ok(CommandOutcome::Output(text)) => println!("{text}"),
        Ok(CommandOutcome::Done) => println!("{}", "\nSuccessful command execution".green()),
        Err(e) => {
            eprintln!("{}", format!("\n{e}").red());
            std::process::exit(1);
        }
    }
}
