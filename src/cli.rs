use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// First directory (left side)
    pub dir1: PathBuf,

    /// Second directory (right side)
    pub dir2: PathBuf,
}
