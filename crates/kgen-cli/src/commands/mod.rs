//! Command implementations for kgen-cli

pub mod completions;
pub mod generate;

pub use completions::run_completions;
pub use generate::run_generate;
