//! Command handler modules for the tripoker CLI.
//!
//! Each subcommand is implemented in its own module file with a consistent
//! pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Dependency injection: output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: all errors propagated via the `CliError` enum

pub mod cfg;
pub mod chart;
pub mod classify;
pub mod decide;

pub use cfg::handle_cfg_command;
pub use chart::handle_chart_command;
pub use classify::handle_classify_command;
pub use decide::handle_decide_command;
