//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the current
//! tripoker configuration settings with their sources (default,
//! environment, or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "strategy": {
//!     "value": "baseline",
//!     "source": "default"
//!   },
//!   "pretty": {
//!     "value": false,
//!     "source": "default"
//!   }
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// Loads the current configuration with source tracking and displays it
/// as formatted JSON to the output stream.
///
/// # Returns
///
/// * `Ok(())` on success
/// * `Err(CliError::Config)` if configuration loading fails
/// * `Err(CliError::Io)` if writing to the output stream fails
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "strategy": {
            "value": config.strategy,
            "source": sources.strategy,
        },
        "pretty": {
            "value": config.pretty,
            "source": sources.pretty,
        },
    });
    let pretty =
        serde_json::to_string_pretty(&display).map_err(|e| CliError::Engine(e.to_string()))?;
    writeln!(out, "{}", pretty)?;
    Ok(())
}
