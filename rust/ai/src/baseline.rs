//! Baseline rule-based strategy.
//!
//! Implements the fixed decision pipeline: classify the three-card hand,
//! raise anything above high card, and fall back to a per-table-rank
//! threshold chart for high-card hands.

use crate::Strategy;
use tripoker_engine::errors::EngineError;
use tripoker_engine::hand::{hand_category, Category};
use tripoker_engine::state::{Action, GameState};

/// Fixed high-card action chart: `table rank -> (raise_at, call_at)`
/// thresholds on the maximum hole-card rank.
///
/// The thresholds are an ad hoc heuristic, not derived from equity; they
/// are kept as an explicit per-rank table rather than collapsed into a
/// formula because adjacent buckets are not uniformly patterned (note the
/// call threshold of 10 at table rank 9, between the 9s of ranks 10-13 and
/// the 11s of ranks 5-8).
pub const HIGH_CARD_CHART: [(u8, (u8, u8)); 13] = [
    (2, (13, 10)),
    (3, (13, 11)),
    (4, (13, 11)),
    (5, (13, 11)),
    (6, (13, 11)),
    (7, (13, 11)),
    (8, (13, 11)),
    (9, (13, 10)),
    (10, (13, 9)),
    (11, (13, 9)),
    (12, (13, 9)),
    (13, (12, 9)),
    (14, (12, 9)),
];

/// Look up the (raise, call) thresholds for a table-card rank.
/// `None` only for ranks outside 2..=14, unreachable for parsed cards.
pub fn chart_thresholds(table_rank: u8) -> Option<(u8, u8)> {
    HIGH_CARD_CHART
        .iter()
        .find(|(rank, _)| *rank == table_rank)
        .map(|(_, thresholds)| *thresholds)
}

/// Resolve a high-card hand against the chart.
///
/// Raise when the best hole rank meets the raise threshold, call when it
/// meets the call threshold, otherwise fold. Unknown table ranks fall back
/// to call.
pub fn high_card_action(hole_max: u8, table_rank: u8) -> Action {
    match chart_thresholds(table_rank) {
        Some((raise_at, call_at)) => {
            if hole_max >= raise_at {
                Action::Raise
            } else if hole_max >= call_at {
                Action::Call
            } else {
                Action::Fold
            }
        }
        None => Action::Call,
    }
}

/// The baseline strategy: a deterministic rule chain with no randomness
/// and no retained state.
///
/// # Strategy
///
/// - Incomplete state (missing hole or table card): call.
/// - Any made hand (pair or better): raise, with no further distinction
///   between pair, flush, straight, trips, or straight flush.
/// - High card: consult [`HIGH_CARD_CHART`] on the table-card rank and the
///   best hole-card rank.
///
/// # Example
///
/// ```rust
/// use tripoker_ai::baseline::BaselineStrategy;
/// use tripoker_ai::Strategy;
/// use tripoker_engine::state::{Action, GameState};
///
/// let strategy = BaselineStrategy::new();
/// assert_eq!(strategy.name(), "BaselineStrategy");
///
/// let state = GameState::new(["AH", "KH"], "QH");
/// assert_eq!(strategy.decide(&state).unwrap(), Action::Raise);
/// ```
#[derive(Debug, Clone)]
pub struct BaselineStrategy;

impl BaselineStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BaselineStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for BaselineStrategy {
    fn decide(&self, state: &GameState) -> Result<Action, EngineError> {
        let (hole, table) = match state.cards()? {
            // Absent or empty cards: the default safe action.
            None => return Ok(Action::Call),
            Some(parsed) => parsed,
        };

        let category = hand_category(hole, table);
        if category >= Category::Pair {
            return Ok(Action::Raise);
        }

        let hole_max = hole[0].rank.max(hole[1].rank) as u8;
        Ok(high_card_action(hole_max, table.rank as u8))
    }

    fn name(&self) -> &str {
        "BaselineStrategy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decide(hole: [&str; 2], table: &str) -> Action {
        BaselineStrategy::new()
            .decide(&GameState::new(hole, table))
            .unwrap()
    }

    #[test]
    fn chart_covers_all_thirteen_ranks() {
        for rank in 2..=14u8 {
            assert!(
                chart_thresholds(rank).is_some(),
                "chart must cover table rank {}",
                rank
            );
        }
        assert_eq!(chart_thresholds(1), None);
        assert_eq!(chart_thresholds(15), None);
    }

    #[test]
    fn chart_thresholds_match_the_fixed_heuristic() {
        // Ace and King share the only raise-at-12 bucket.
        assert_eq!(chart_thresholds(14), Some((12, 9)));
        assert_eq!(chart_thresholds(13), Some((12, 9)));
        // Queen through ten.
        for rank in 10..=12 {
            assert_eq!(chart_thresholds(rank), Some((13, 9)));
        }
        // Rank 9 breaks the adjacent pattern with call-at-10.
        assert_eq!(chart_thresholds(9), Some((13, 10)));
        // Middle and low buckets.
        for rank in 3..=8 {
            assert_eq!(chart_thresholds(rank), Some((13, 11)));
        }
        assert_eq!(chart_thresholds(2), Some((13, 10)));
    }

    #[test]
    fn unknown_table_rank_falls_back_to_call() {
        assert_eq!(high_card_action(14, 1), Action::Call);
        assert_eq!(high_card_action(2, 0), Action::Call);
    }

    #[test]
    fn straight_flush_raises() {
        assert_eq!(decide(["AH", "KH"], "QH"), Action::Raise);
    }

    #[test]
    fn pair_raises() {
        assert_eq!(decide(["2C", "2D"], "9S"), Action::Raise);
    }

    #[test]
    fn flush_raises() {
        assert_eq!(decide(["2H", "9H"], "KH"), Action::Raise);
    }

    #[test]
    fn straight_raises() {
        assert_eq!(decide(["5C", "6D"], "7H"), Action::Raise);
        // Ace-low wheel is a straight, so it raises too.
        assert_eq!(decide(["2C", "3D"], "AS"), Action::Raise);
    }

    #[test]
    fn trips_raise() {
        assert_eq!(decide(["7C", "7D"], "7H"), Action::Raise);
    }

    #[test]
    fn high_card_calls_at_the_boundary() {
        // Table ace, hole max 9: exactly the call threshold.
        assert_eq!(decide(["9C", "4D"], "AS"), Action::Call);
        // Table ace, hole max queen: exactly the raise threshold.
        assert_eq!(decide(["QC", "4D"], "AS"), Action::Raise);
    }

    #[test]
    fn high_card_folds_below_threshold() {
        // Table king, hole max 8: below the call threshold of 9.
        assert_eq!(decide(["8C", "4D"], "KS"), Action::Fold);
        // Table 5, hole max 10: below the call threshold of 11.
        assert_eq!(decide(["TC", "4D"], "5S"), Action::Fold);
    }

    #[test]
    fn table_nine_uses_its_own_call_threshold() {
        // Rank 9's call threshold is 10, unlike ranks 10-13 (9).
        assert_eq!(decide(["TC", "4D"], "9S"), Action::Call);
        assert_eq!(decide(["TC", "4D"], "JS"), Action::Call);
        assert_eq!(decide(["KC", "4D"], "9S"), Action::Raise);
    }

    #[test]
    fn table_deuce_calls_at_ten() {
        assert_eq!(decide(["TC", "4D"], "2S"), Action::Call);
        assert_eq!(decide(["9C", "4D"], "2S"), Action::Fold);
        assert_eq!(decide(["KC", "4D"], "2S"), Action::Raise);
    }

    #[test]
    fn empty_hole_calls() {
        let strategy = BaselineStrategy::new();
        let state = GameState {
            your_hole: vec![],
            table_card: "AS".to_string(),
        };
        assert_eq!(strategy.decide(&state).unwrap(), Action::Call);
    }

    #[test]
    fn empty_table_card_calls() {
        let strategy = BaselineStrategy::new();
        let state = GameState {
            your_hole: vec!["AH".to_string(), "KH".to_string()],
            table_card: String::new(),
        };
        assert_eq!(strategy.decide(&state).unwrap(), Action::Call);
    }

    #[test]
    fn empty_state_calls() {
        let strategy = BaselineStrategy::new();
        assert_eq!(
            strategy.decide(&GameState::default()).unwrap(),
            Action::Call
        );
    }

    #[test]
    fn invalid_card_token_is_an_error() {
        let strategy = BaselineStrategy::new();
        let state = GameState::new(["XH", "KD"], "QS");
        assert!(strategy.decide(&state).is_err());
    }

    #[test]
    fn decisions_are_deterministic() {
        let strategy = BaselineStrategy::new();
        let state = GameState::new(["9C", "4D"], "AS");
        let first = strategy.decide(&state).unwrap();
        for _ in 0..100 {
            assert_eq!(strategy.decide(&state).unwrap(), first);
        }
    }
}
