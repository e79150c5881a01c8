use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use dircmp::cli::Args;
use dircmp::compare::compare_common;
use dircmp::diff::diff_roots;
use dircmp::report::{write_report, ComparisonReport};

fn main() {
    let args = Args::parse();

    // Both roots are checked up front; the comparison engine is never
    // invoked with an invalid one.
    for dir in [&args.dir1, &args.dir2] {
        if !dir.is_dir() {
            eprintln!("{} is not a valid directory", dir.display());
            process::exit(1);
        }
    }

    if let Err(err) = run(&args) {
        eprintln!("dircmp: {err:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    // Progress notes go to stderr; stdout carries nothing but the report.
    eprintln!("Analyzing directories...");
    let tree_diff = diff_roots(&args.dir1, &args.dir2)?;

    eprintln!("Comparing common files by digest...");
    let differing = compare_common(&args.dir1, &args.dir2, &tree_diff.common_files)?;

    let report = ComparisonReport::new(&args.dir1, &args.dir2, tree_diff, differing);

    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &report).context("failed to write report")?;

    Ok(())
}
