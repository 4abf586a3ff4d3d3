//! Export command - Write the optimal policy table to JSON

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::ProgressBar;

use crate::{
    cli::output::{create_policy_progress, format_number, print_kv, print_section},
    policy::compute_policy_with_progress,
    search::SearchConfig,
};

#[derive(Parser, Debug)]
#[command(about = "Export the optimal policy for every reachable position")]
pub struct ExportArgs {
    /// Output JSON file
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let mut progress: Option<ProgressBar> = None;

    let table = compute_policy_with_progress(SearchConfig::default(), |done, total| {
        if args.quiet {
            return;
        }
        if progress.is_none() {
            progress = create_policy_progress(total as u64).ok();
        }
        if let Some(pb) = &progress {
            pb.set_position(done as u64);
        }
    })?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    table
        .write_json(&args.output)
        .with_context(|| format!("writing policy to {}", args.output.display()))?;

    print_section("Policy export");
    print_kv("Positions", &format_number(table.len() as u64));
    print_kv("Output", &args.output.display().to_string());

    Ok(())
}
