//! REPL (Read-Eval-Print Loop) implementation
//!
//! Reads SimpleScript lines, compiles them, and prints the generated
//! JavaScript. Nothing is ever executed.

use crate::error::{CliError, CliResult};
use crate::session::Session;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Run the interactive REPL
///
/// # Arguments
/// * `session` - The compile session to use
///
/// # Returns
/// `Ok(())` when the REPL exits normally
pub fn run_repl(session: &Session) -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::ReplError(format!("failed to initialize editor: {}", e)))?;

    println!("SimpleScript Compiler v0.1.0");
    println!("Type SimpleScript code or 'exit' to quit.");
    println!();

    let mut buffer = String::new();
    let mut in_multiline = false;

    loop {
        let prompt = if in_multiline { "... " } else { "> " };

        match editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                // Check for exit commands
                if !in_multiline && (trimmed == "exit" || trimmed == "quit") {
                    println!("Goodbye!");
                    break;
                }

                if !in_multiline && trimmed.is_empty() {
                    continue;
                }

                // Accumulate input
                if in_multiline {
                    buffer.push('\n');
                }
                buffer.push_str(&line);

                match session.compile_source(&buffer) {
                    Ok(code) => {
                        let _ = editor.add_history_entry(&buffer);
                        println!("{}", code);
                        buffer.clear();
                        in_multiline = false;
                    }
                    Err(error) if needs_more_input(&error) => {
                        // an open block: keep reading lines
                        in_multiline = true;
                    }
                    Err(error) => {
                        let _ = editor.add_history_entry(&buffer);
                        eprintln!("Error: {}", error);
                        buffer.clear();
                        in_multiline = false;
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C
                if in_multiline {
                    println!("^C");
                    buffer.clear();
                    in_multiline = false;
                } else {
                    println!("Press Ctrl-D or type 'exit' to quit");
                }
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                return Err(CliError::ReplError(format!("readline error: {}", err)));
            }
        }
    }

    Ok(())
}

/// True when the error means the submitted input is an unfinished block
/// rather than a mistake
fn needs_more_input(error: &CliError) -> bool {
    match error {
        CliError::CompileError(e) => {
            e.message == "expected 'end'" || e.message == "unexpected end of input"
        }
        _ => false,
    }
}
