//! Line input on top of rustyline.

use anyhow::Result;
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// What the player typed, or a request to leave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    Quit,
}

pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }

    /// Reads one trimmed line. CTRL-C, CTRL-D and `salir` all quit.
    pub fn read(&mut self, prompt: &str) -> Result<Input> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if matches!(trimmed, "salir" | "quit" | "exit") {
                    return Ok(Input::Quit);
                }
                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }
                Ok(Input::Line(trimmed.to_string()))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(Input::Quit),
            Err(err) => Err(err.into()),
        }
    }

    /// Waits for Enter under a button-like label. Returns false if the
    /// player quit instead.
    pub fn pause(&mut self, label: &str) -> Result<bool> {
        println!();
        let prompt = format!("[ {} ] (Enter) ", label).bright_cyan().to_string();
        Ok(matches!(self.read(&prompt)?, Input::Line(_)))
    }
}
