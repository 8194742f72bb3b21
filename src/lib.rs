pub mod ast;
pub mod cli;
pub mod fs;
pub mod pattern;
pub mod report;
pub mod rewrite;
pub mod transform;

#[cfg(test)]
pub mod testutil;

use anyhow::{Context, Result};
use rayon::prelude::*;

use cli::Args;
use fs::discover_files;
use report::Report;
use transform::transform_file;

/// Run the transformer. Returns the exit code: 0 = success, 2 = error
/// (surfaced through `main` via the `Err` path).
pub fn run(args: Args) -> Result<i32> {
    let start = std::time::Instant::now();
    let files = discover_files(&args.paths, &args.exclude)?;

    // --list-files: print discovered files and exit
    if args.list_files {
        for file in &files {
            println!("{}", file.display());
        }
        return Ok(0);
    }

    if files.is_empty() {
        anyhow::bail!("no JSON AST files found in the given paths");
    }
    if !args.write && files.len() > 1 {
        anyhow::bail!(
            "{} input files; pass --write to rewrite in place (stdout output takes a single file)",
            files.len()
        );
    }

    if args.debug {
        eprintln!("debug: {} files to transform", files.len());
    }

    let outcomes: Vec<Result<usize>> = files
        .par_iter()
        .map(|path| {
            let outcome = transform_file(path)?;
            if args.write {
                std::fs::write(path, &outcome.output)
                    .with_context(|| format!("failed to write {}", path.display()))?;
            } else {
                print!("{}", outcome.output);
            }
            Ok(outcome.rewritten)
        })
        .collect();

    let mut report = Report::default();
    for outcome in outcomes {
        report.record(outcome?);
    }

    if args.debug {
        eprintln!(
            "debug: transformed {} files in {:.0?}",
            report.files,
            start.elapsed()
        );
    }

    // In stdout mode the transformed AST owns stdout; the summary moves to
    // stderr so output stays machine-readable.
    let summary = report.render(&args.format)?;
    if args.write {
        println!("{summary}");
    } else {
        eprintln!("{summary}");
    }

    Ok(0)
}
