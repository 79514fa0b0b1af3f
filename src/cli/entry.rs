use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::prune::{Pruner, sample};
use crate::utils::format_selection_message;

use super::prompts::Prompt;

#[derive(Parser, Debug, Clone)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = "Randomly prune a fixed number of files from a directory"
)]
pub struct Args {
    /// Directory to prune (non-recursive; only regular files are eligible)
    #[arg(value_name = "DIR")]
    pub directory: PathBuf,

    /// Number of files to delete
    #[arg(short = 'n', long = "count", value_name = "N")]
    pub count: usize,

    /// Delete without asking for confirmation
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Disable interactive prompts (the confirmation counts as declined)
    #[arg(long)]
    pub non_interactive: bool,
}

pub fn run(args: Args) -> Result<()> {
    run_with_prompt(args, None)
}

pub fn run_with_prompt(args: Args, prompt: Option<Prompt>) -> Result<()> {
    let prompt = prompt.unwrap_or_else(|| Prompt::new(!args.non_interactive));

    let pruner = Pruner::new(&args.directory)?;

    println!(
        "Attempting to remove {} random file(s) from '{}'...",
        args.count,
        pruner.root().display()
    );

    let eligible = pruner.list_files()?;

    let Some(selection) = sample::draw(&eligible, args.count) else {
        println!(
            "Warning: '{}' contains only {} file(s), fewer than the {} requested for removal.",
            pruner.root().display(),
            eligible.len(),
            args.count
        );
        println!("No files will be deleted.");
        return Ok(());
    };

    print!("{}", format_selection_message(&selection));

    if !args.force {
        let confirmed = prompt.confirm("Are you sure you want to proceed? (yes/no):")?;
        if !confirmed {
            println!("\nOperation cancelled by user.");
            return Ok(());
        }
    }

    println!("\nDeleting files...");
    let report = pruner.delete_files(&selection);

    println!("\n--- Deletion Complete ---");
    println!("Successfully deleted: {} file(s).", report.deleted);
    if report.failed > 0 {
        println!("Failed to delete:    {} file(s).", report.failed);
    }

    Ok(())
}
