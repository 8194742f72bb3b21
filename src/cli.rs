use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "unrequire",
    version,
    about = "Rewrite CommonJS require declarations into ES module imports"
)]
pub struct Args {
    /// JSON AST files or directories to transform
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Rewrite files in place (default: print a single input to stdout)
    #[arg(short, long)]
    pub write: bool,

    /// Glob patterns to skip during directory discovery (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Run summary format
    #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Print files that would be transformed, then exit
    #[arg(short = 'L', long)]
    pub list_files: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}
