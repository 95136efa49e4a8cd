//! CLI command handlers, one per file.

mod completions;
mod man;
mod parse;
mod resolve;

pub use completions::run_completions;
pub use man::run_man;
pub use parse::run_parse;
pub use resolve::{run_resolve, ResolveArgs};
