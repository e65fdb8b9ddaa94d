//! Chart command handler.
//!
//! Prints the baseline high-card action chart as JSON: for each table-card
//! rank, the hole max-rank thresholds at which the strategy raises or
//! calls (below the call threshold it folds).
//!
//! # Example Output
//!
//! ```json
//! [
//!   {
//!     "table_rank": 2,
//!     "raise_at": 13,
//!     "call_at": 10
//!   },
//!   ...
//! ]
//! ```

use crate::error::CliError;
use std::io::Write;
use tripoker_ai::baseline::HIGH_CARD_CHART;

/// Handle the chart command.
///
/// # Arguments
///
/// * `out` - Output stream for the chart JSON
///
/// # Returns
///
/// `Ok(())` on success, `CliError::Io` if writing fails.
pub fn handle_chart_command(out: &mut dyn Write) -> Result<(), CliError> {
    let rows: Vec<serde_json::Value> = HIGH_CARD_CHART
        .iter()
        .map(|(table_rank, (raise_at, call_at))| {
            serde_json::json!({
                "table_rank": table_rank,
                "raise_at": raise_at,
                "call_at": call_at,
            })
        })
        .collect();
    let pretty =
        serde_json::to_string_pretty(&rows).map_err(|e| CliError::Engine(e.to_string()))?;
    writeln!(out, "{}", pretty)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_lists_all_thirteen_ranks() {
        let mut out = Vec::new();
        handle_chart_command(&mut out).unwrap();
        let rows: Vec<serde_json::Value> = serde_json::from_slice(&out).unwrap();
        assert_eq!(rows.len(), 13);
        let ranks: Vec<u64> = rows
            .iter()
            .map(|r| r["table_rank"].as_u64().unwrap())
            .collect();
        assert_eq!(ranks, (2..=14).collect::<Vec<u64>>());
    }

    #[test]
    fn test_chart_preserves_the_rank_nine_asymmetry() {
        let mut out = Vec::new();
        handle_chart_command(&mut out).unwrap();
        let rows: Vec<serde_json::Value> = serde_json::from_slice(&out).unwrap();
        let nine = rows.iter().find(|r| r["table_rank"] == 9).unwrap();
        assert_eq!(nine["raise_at"], 13);
        assert_eq!(nine["call_at"], 10);
    }
}
