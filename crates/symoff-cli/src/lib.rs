//! Crate implementing the `symbol-to-offset` command.

mod cli;
mod resolve;
mod table;

pub use self::cli::CliOpts;
pub use self::resolve::evaluate_resolve;
pub use self::table::ResolutionTable;
