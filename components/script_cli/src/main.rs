//! SimpleScript Compiler CLI
//!
//! Entry point for the compiler. Parses CLI arguments and delegates to
//! the compile session.

use clap::Parser as ClapParser;
use core_types::{ErrorKind, ScriptError};
use script_cli::{Cli, CliError, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let session = Session::new().with_print_ast(cli.print_ast);

    if let Some(file) = cli.file {
        match session.compile_file(&file) {
            Ok(code) => write_output(&code, cli.output.as_deref())?,
            Err(CliError::IoError(e)) => {
                eprintln!("Error: Could not read file '{}': {}", file, e);
                std::process::exit(1);
            }
            Err(CliError::CompileError(e)) => {
                report_compile_error(&e);
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else if let Some(source) = cli.eval {
        match session.compile_source(&source) {
            Ok(code) => write_output(&code, cli.output.as_deref())?,
            Err(CliError::CompileError(e)) => {
                report_compile_error(&e);
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else if cli.repl {
        script_cli::repl::run_repl(&session)?;
    } else {
        // Default: show usage
        println!("SimpleScript Compiler v0.1.0");
        println!();
        println!("Usage:");
        println!("  sscript --file <FILE>     Compile a SimpleScript file");
        println!("  sscript --eval <CODE>     Compile inline SimpleScript code");
        println!("  sscript --repl            Start interactive REPL");
        println!();
        println!("Run 'sscript --help' for more options.");
    }

    Ok(())
}

fn write_output(code: &str, output: Option<&str>) -> std::io::Result<()> {
    match output {
        Some(path) => std::fs::write(path, format!("{}\n", code)),
        None => {
            println!("{}", code);
            Ok(())
        }
    }
}

fn report_compile_error(error: &ScriptError) {
    match error.kind {
        ErrorKind::LexicalError => eprintln!("Lexical Error: {}", error),
        ErrorKind::SyntaxError => eprintln!("Syntax Error: {}", error),
        ErrorKind::CodegenError => eprintln!("Codegen Error: {}", error),
    }
}
