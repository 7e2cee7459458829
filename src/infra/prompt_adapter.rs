use std::io::{self, BufRead, IsTerminal, Write};

use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};

use crate::errors::{CloudPhotoError, Result};
use crate::ports::Prompter;

/// Prompts on the terminal with reedline, or reads plain lines when stdin is piped
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn prompt(&self, label: &str) -> Result<String> {
        if !io::stdin().is_terminal() {
            print!("{label}: ");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            return Ok(line.trim().to_string());
        }

        let mut editor = Reedline::create();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(label.to_string()),
            DefaultPromptSegment::Empty,
        );

        match editor.read_line(&prompt) {
            Ok(Signal::Success(buffer)) => Ok(buffer.trim().to_string()),
            Ok(Signal::CtrlC | Signal::CtrlD) => Err(CloudPhotoError::Config(
                "Initialization cancelled by user".to_string(),
            )),
            #[allow(unreachable_patterns)]
            Ok(_) => Ok(String::new()),
            Err(e) => Err(CloudPhotoError::Io(e)),
        }
    }
}
