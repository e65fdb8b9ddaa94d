//! Classify command handler: hand classification without a decision.
//!
//! Useful for inspecting what the engine makes of a three-card hand
//! independently of the strategy layer.

use crate::error::CliError;
use std::io::Write;
use tripoker_engine::cards::Card;
use tripoker_engine::hand::hand_category;

/// Handle the classify command.
///
/// Parses the two hole tokens and the table token, classifies the hand,
/// and prints the category name with its ordinal.
///
/// # Arguments
///
/// * `hole` - The two hole card tokens
/// * `table` - The table card token
/// * `out` - Output stream for the classification
///
/// # Returns
///
/// `Ok(())` on success, `CliError::Engine` for an invalid card token.
pub fn handle_classify_command(
    hole: &[String],
    table: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if hole.len() != 2 {
        return Err(CliError::InvalidInput(format!(
            "expected exactly 2 hole cards, got {}",
            hole.len()
        )));
    }
    let hole = [Card::parse(&hole[0])?, Card::parse(&hole[1])?];
    let table = Card::parse(table)?;
    let category = hand_category(hole, table);
    writeln!(out, "Category: {:?} ({})", category, category as u8)?;
    Ok(())
}
