//! CLI command handlers, one file per command.

mod batch;
mod completions;
mod convert;
mod man;

pub use batch::{run_batch, BatchArgs};
pub use completions::run_completions;
pub use convert::run_convert;
pub use man::run_man;
