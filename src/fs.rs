use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

/// Discover JSON AST files from the given paths, respecting .gitignore and
/// `--exclude` globs. Explicitly passed files bypass both filters.
pub fn discover_files(paths: &[PathBuf], excludes: &[String]) -> Result<Vec<PathBuf>> {
    let exclude_set = build_exclude_set(excludes)?;
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            files.extend(walk_directory(path, &exclude_set)?);
        } else {
            anyhow::bail!("path does not exist: {}", path.display());
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn build_exclude_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .with_context(|| format!("invalid exclude pattern: {pattern}"))?;
        builder.add(glob);
    }
    builder.build().context("failed to build exclude set")
}

fn walk_directory(dir: &Path, excludes: &GlobSet) -> Result<Vec<PathBuf>> {
    let mut builder = WalkBuilder::new(dir);
    builder.hidden(true).git_ignore(true).git_global(true);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry.context("error walking directory")?;
        let path = entry.path();
        if path.is_file()
            && path.extension().is_some_and(|ext| ext == "json")
            && !excludes.is_match(path)
        {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}
