use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::EngineError;

/// The discrete action a strategy can take at a decision point.
/// Serialized as the literal strings `"FOLD"`, `"CALL"`, `"RAISE"`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    /// Fold and forfeit the hand
    Fold,
    /// Call (the default safe action for incomplete states)
    Call,
    /// Raise the current bet
    Raise,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Fold => "FOLD",
            Action::Call => "CALL",
            Action::Raise => "RAISE",
        }
    }
}

/// Input snapshot for a single decision: two private hole card tokens and
/// the shared table card token.
///
/// Both fields are absent-tolerant: a JSON payload missing either field
/// deserializes with that field empty, and strategies treat the state as
/// incomplete rather than failing.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// The two private card tokens (e.g. `["AH", "KD"]`)
    #[serde(default)]
    pub your_hole: Vec<String>,
    /// The single shared card token (e.g. `"QS"`)
    #[serde(default)]
    pub table_card: String,
}

impl GameState {
    pub fn new(hole: [&str; 2], table: &str) -> Self {
        Self {
            your_hole: vec![hole[0].to_string(), hole[1].to_string()],
            table_card: table.to_string(),
        }
    }

    /// Parse a raw JSON payload into a state, treating anything malformed
    /// as the empty state. Missing fields fall back to their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripoker_engine::state::GameState;
    ///
    /// let state = GameState::from_json("not json at all");
    /// assert_eq!(state, GameState::default());
    /// ```
    pub fn from_json(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return GameState::default();
        }
        serde_json::from_str(trimmed).unwrap_or_default()
    }

    /// True when the state carries exactly two non-empty hole tokens and a
    /// non-empty table token. A wrong hole-card count is treated the same
    /// as an absent field.
    pub fn is_complete(&self) -> bool {
        self.your_hole.len() == 2
            && self.your_hole.iter().all(|t| !t.is_empty())
            && !self.table_card.is_empty()
    }

    /// Parse the state's card tokens.
    ///
    /// Returns `Ok(None)` for an incomplete state. For a complete state,
    /// returns the two hole cards and the table card, or the first
    /// [`EngineError::InvalidCard`] encountered. Parsing either fully
    /// succeeds or fails; there are no partial results.
    pub fn cards(&self) -> Result<Option<([Card; 2], Card)>, EngineError> {
        if !self.is_complete() {
            return Ok(None);
        }
        let hole = [
            Card::parse(&self.your_hole[0])?,
            Card::parse(&self.your_hole[1])?,
        ];
        let table = Card::parse(&self.table_card)?;
        Ok(Some((hole, table)))
    }
}
