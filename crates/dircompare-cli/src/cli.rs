use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Directory Comparison Tool
///
/// Compare two directory trees file by file and write a plain text report
#[derive(Parser, Debug)]
#[command(name = "dircompare")]
#[command(about, long_about = None, version)]
pub struct Cli {
    /// Reference directory (Directory A); prompted for when omitted
    #[arg(value_name = "DIR_A")]
    pub dir_a: Option<PathBuf>,

    /// Directory compared against A (Directory B); prompted for when omitted
    #[arg(value_name = "DIR_B")]
    pub dir_b: Option<PathBuf>,

    /// Write the report here (default: ./comparison_report.txt)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Use specific config file
    #[arg(long, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore all config files
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Descend into symlinked directories instead of skipping them
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Do not display comparison progress
    #[arg(long)]
    pub no_progress: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
