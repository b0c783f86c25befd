//! The interactive menu loop.
//!
//! A single-threaded, blocking loop: show the menu, read a choice, prompt
//! for the paths the chosen operation needs (re-prompting until validation
//! passes), run it, wait for an acknowledgment, repeat. Any operation error
//! is printed and the loop returns to the menu; only choice 5 or end of
//! input terminates the session.
//!
//! The session is generic over its reader and writer so tests can drive it
//! with in-memory buffers instead of a terminal.

use crate::config::MenuConfig;
use crate::ops::{dispatch, Operation, PDF_EXTENSION};
use crate::paths::{normalize, validate_input_file, validate_output_location};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

/// What the user picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Operation(Operation),
    Exit,
}

/// Menu entries in display order, paired with their number.
const MENU_OPERATIONS: [Operation; 4] = [
    Operation::ExtractText,
    Operation::ExtractImages,
    Operation::ConvertToPostScript,
    Operation::ConvertToPng,
];

/// An interactive session over an arbitrary reader/writer pair.
pub struct MenuSession<'a, R, W> {
    config: &'a MenuConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> MenuSession<'a, R, W> {
    pub fn new(config: &'a MenuConfig, input: R, output: W) -> Self {
        Self {
            config,
            input,
            output,
        }
    }

    /// Drive the loop until the user exits (choice 5) or input ends.
    ///
    /// Returns `Err` only for I/O failures on the session's own reader or
    /// writer; operation failures are printed and recovered.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_menu()?;

            let choice = match self.read_choice()? {
                Some(c) => c,
                None => return Ok(()), // EOF: leave quietly
            };

            match choice {
                MenuChoice::Exit => {
                    writeln!(self.output, "Exiting the program.")?;
                    return Ok(());
                }
                MenuChoice::Operation(op) => {
                    debug!("Dispatching operation: {:?}", op);
                    if !self.run_operation(op)? {
                        return Ok(()); // EOF mid-prompt
                    }
                }
            }

            if !self.wait_for_ack()? {
                return Ok(());
            }
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nPDF Utility Menu:")?;
        for (idx, op) in MENU_OPERATIONS.iter().enumerate() {
            writeln!(self.output, "{}. {}", idx + 1, op.label())?;
        }
        writeln!(self.output, "5. Exit")
    }

    /// Read a menu choice, re-prompting until a number 1–5 arrives.
    /// `None` means the input stream ended.
    fn read_choice(&mut self) -> io::Result<Option<MenuChoice>> {
        loop {
            let line = match self
                .prompt("Enter the number corresponding to the operation you want to perform: ")?
            {
                Some(l) => l,
                None => return Ok(None),
            };

            match line.parse::<usize>() {
                Ok(n @ 1..=4) => return Ok(Some(MenuChoice::Operation(MENU_OPERATIONS[n - 1]))),
                Ok(5) => return Ok(Some(MenuChoice::Exit)),
                _ => {
                    writeln!(
                        self.output,
                        "Invalid input: Please enter a number between 1 and 5."
                    )?;
                }
            }
        }
    }

    /// Prompt for the two paths, dispatch, and report the outcome.
    /// Returns `Ok(false)` when input ended mid-prompt.
    fn run_operation(&mut self, op: Operation) -> io::Result<bool> {
        let pdf = match self.prompt_input_pdf()? {
            Some(p) => p,
            None => return Ok(false),
        };

        let output = match self.prompt_output(op)? {
            Some(p) => p,
            None => return Ok(false),
        };

        match dispatch(self.config, op, &pdf, &output) {
            Ok(resolved) => {
                let message = match op {
                    Operation::ExtractText => {
                        format!("Text extracted and saved to {}", resolved.display())
                    }
                    Operation::ExtractImages => {
                        format!("Images extracted and saved to {}", resolved.display())
                    }
                    Operation::ConvertToPostScript => format!(
                        "PDF converted to PostScript and saved to {}",
                        resolved.display()
                    ),
                    Operation::ConvertToPng => format!(
                        "PDF pages converted to PNG images and saved to {}",
                        resolved.display()
                    ),
                };
                writeln!(self.output, "{message}")?;
            }
            Err(e) => {
                writeln!(self.output, "An error occurred: {e}")?;
            }
        }
        Ok(true)
    }

    /// Prompt for the input PDF until it validates.
    fn prompt_input_pdf(&mut self) -> io::Result<Option<PathBuf>> {
        loop {
            let line = match self.prompt("Enter the path to the PDF file: ")? {
                Some(l) => l,
                None => return Ok(None),
            };
            match validate_input_file(&line, PDF_EXTENSION) {
                Ok(path) => return Ok(Some(path)),
                Err(e) => writeln!(self.output, "Invalid input: {e}")?,
            }
        }
    }

    /// Prompt for the output target. Folder targets are created on the spot
    /// (and re-prompted if creation fails); file targets are only normalised.
    fn prompt_output(&mut self, op: Operation) -> io::Result<Option<PathBuf>> {
        let prompt = match op {
            Operation::ExtractText => "Enter the path to save the extracted text file: ",
            Operation::ExtractImages => "Enter the folder to save extracted images: ",
            Operation::ConvertToPostScript => "Enter the path to save the PostScript file: ",
            Operation::ConvertToPng => "Enter the folder to save PNG files: ",
        };

        loop {
            let line = match self.prompt(prompt)? {
                Some(l) => l,
                None => return Ok(None),
            };

            if op.writes_to_folder() {
                match validate_output_location(&line) {
                    Ok(folder) => return Ok(Some(folder)),
                    Err(e) => writeln!(self.output, "Invalid input: {e}")?,
                }
            } else {
                return Ok(Some(normalize(&line)));
            }
        }
    }

    /// Block until the user acknowledges. `false` means EOF.
    fn wait_for_ack(&mut self) -> io::Result<bool> {
        Ok(self
            .prompt("Press Enter to return to the main menu...")?
            .is_some())
    }

    /// Write `text` without a newline, flush, and read one trimmed line.
    /// `None` means the input stream ended.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
