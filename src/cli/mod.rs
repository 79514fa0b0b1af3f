pub mod entry;
pub mod prompts;

pub use entry::{Args, run, run_with_prompt};
pub use prompts::Prompt;
