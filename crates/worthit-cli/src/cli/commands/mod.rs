//! CLI command handlers. Each command is in its own file.

mod classify;
mod completions;
mod policy;
mod simulate;

pub use classify::run_classify;
pub use completions::run_completions;
pub use policy::{run_policy, PolicyOverrides};
pub use simulate::run_simulate;
