//! Decide command handler: the JSON stdin/stdout decision pipeline.
//!
//! Reads a single `GameState` payload from the input stream, evaluates it
//! with the configured strategy, and writes `{"action": "..."}` to the
//! output stream. Malformed or empty payloads are treated as the empty
//! state (which resolves to CALL); an invalid card token is the one fatal
//! error.

use crate::config;
use crate::error::CliError;
use std::io::{Read, Write};
use std::path::Path;
use tripoker_ai::create_strategy;
use tripoker_engine::hand::hand_category;
use tripoker_engine::logger::{DecisionLogger, DecisionRecord};
use tripoker_engine::state::GameState;

/// Handle the decide command.
///
/// # Arguments
///
/// * `strategy` - Strategy name override; falls back to configuration
/// * `log` - Optional JSONL file to append a `DecisionRecord` to
/// * `input` - Stream carrying the JSON game state (typically stdin)
/// * `out` - Output stream for the action JSON
///
/// # Returns
///
/// `Ok(())` on success. `CliError::InvalidInput` for an unknown strategy,
/// `CliError::Engine` for an invalid card token, `CliError::Io` for stream
/// failures.
pub fn handle_decide_command(
    strategy: Option<String>,
    log: Option<&Path>,
    input: &mut dyn Read,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let kind = strategy.unwrap_or(cfg.strategy);
    let strategy = create_strategy(&kind).map_err(CliError::InvalidInput)?;

    let mut raw = String::new();
    input.read_to_string(&mut raw)?;
    let state = GameState::from_json(&raw);

    let action = strategy.decide(&state)?;
    // cards() cannot fail here: decide() already parsed the same tokens
    let category = state.cards()?.map(|(hole, table)| hand_category(hole, table));

    if let Some(path) = log {
        let mut logger = DecisionLogger::create(path)?;
        let record = DecisionRecord {
            decision_id: logger.next_id(),
            state: state.clone(),
            category,
            action,
            ts: None,
            meta: None,
        };
        logger.write(&record)?;
    }

    let body = serde_json::json!({ "action": action });
    if cfg.pretty {
        let pretty =
            serde_json::to_string_pretty(&body).map_err(|e| CliError::Engine(e.to_string()))?;
        writeln!(out, "{}", pretty)?;
    } else {
        writeln!(out, "{}", body)?;
    }
    Ok(())
}
