//! The comparison command: resolve inputs, compare, write the report

use std::path::PathBuf;

use anyhow::{Context, Result};
use dircompare_core::config::{Config, ConfigManager};
use dircompare_core::{DirectoryComparator, ReportRenderer, ReportWriter, SymlinkPolicy};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::interactive::{self, PROMPT_DIR_A, PROMPT_DIR_B};
use crate::progress::ConsoleObserver;

/// Settings after combining config files with CLI flags
struct RunOptions {
    report_path: PathBuf,
    policy: SymlinkPolicy,
    progress: bool,
}

impl RunOptions {
    fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            report_path: cli.output.clone().unwrap_or_else(|| config.report_path()),
            policy: if cli.follow_symlinks {
                SymlinkPolicy::Follow
            } else {
                config.symlink_policy()
            },
            progress: !cli.no_progress && config.progress(),
        }
    }
}

pub struct Compare;

impl Compare {
    pub fn execute(cli: &Cli) -> Result<()> {
        let config = if cli.no_config {
            Config::default()
        } else {
            ConfigManager::load(cli.config.as_deref()).context("Failed to load configuration")?
        };
        let options = RunOptions::resolve(cli, &config);
        debug!(
            report = %options.report_path.display(),
            policy = ?options.policy,
            progress = options.progress,
            "resolved options"
        );

        let dir_a = match &cli.dir_a {
            Some(path) => path.clone(),
            None => interactive::prompt_directory(PROMPT_DIR_A)?,
        };
        let dir_b = match &cli.dir_b {
            Some(path) => path.clone(),
            None => interactive::prompt_directory(PROMPT_DIR_B)?,
        };

        let mut observer = ConsoleObserver::new(options.progress);
        let result = DirectoryComparator::new(options.policy).compare(&dir_a, &dir_b, &mut observer)?;

        if !result.scan_errors.is_empty() {
            info!(
                count = result.scan_errors.len(),
                "some subtrees could not be read; listings may be partial"
            );
        }
        info!(
            differences = result.has_differences(),
            errored = result.errored.len(),
            "trees compared"
        );

        let report = ReportRenderer::render(&result, &ReportRenderer::timestamp_now());
        ReportWriter::persist(&report, &options.report_path)
            .context("Comparison finished but the report could not be saved")?;

        println!("\n📝 Report saved to: {}", options.report_path.display());
        Ok(())
    }
}
