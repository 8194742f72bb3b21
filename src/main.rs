use std::process;

use clap::Parser;

use unrequire::cli::Args;

fn main() {
    let args = Args::parse();
    match unrequire::run(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(2);
        }
    }
}
