//! CLI argument definitions

use clap::Parser;

/// SimpleScript to JavaScript compiler
#[derive(Parser, Debug)]
#[command(name = "sscript", version, about = "SimpleScript to JavaScript compiler")]
pub struct Cli {
    /// SimpleScript file to compile
    #[arg(short, long)]
    pub file: Option<String>,

    /// Compile inline SimpleScript source text
    #[arg(short, long)]
    pub eval: Option<String>,

    /// Write the generated JavaScript to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Start the interactive REPL
    #[arg(long)]
    pub repl: bool,

    /// Print the parsed AST before emitting code
    #[arg(long)]
    pub print_ast: bool,
}
