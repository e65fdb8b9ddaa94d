//! # tripoker-ai: Decision Strategies for Three-Card Poker
//!
//! Provides decision strategies for the simplified three-card game: given a
//! [`GameState`] (two hole cards plus one table card), a strategy settles on
//! a single [`Action`]. Multiple strategies share a common trait.
//!
//! ## Core Components
//!
//! - [`Strategy`] - Trait defining the interface for decision-making
//! - [`baseline`] - The baseline rule-based strategy
//! - [`create_strategy`] - Factory function for creating strategies by name
//!
//! ## Quick Start
//!
//! ```rust
//! use tripoker_ai::{create_strategy, Strategy};
//! use tripoker_engine::state::{Action, GameState};
//!
//! let strategy = create_strategy("baseline").unwrap();
//!
//! let state = GameState::new(["2C", "2D"], "9S");
//! let action = strategy.decide(&state).unwrap();
//! assert_eq!(action, Action::Raise);
//! ```

use tripoker_engine::errors::EngineError;
use tripoker_engine::state::{Action, GameState};

pub mod baseline;

/// Trait defining the interface for decision strategies.
///
/// A strategy is a pure function of the input state: identical input always
/// yields identical output, with no retained state between calls.
pub trait Strategy: Send + Sync + std::fmt::Debug {
    /// Settle on an action for the given state.
    ///
    /// Incomplete states (missing or empty hole/table cards) must resolve
    /// to [`Action::Call`] rather than an error; a card token with an
    /// unrecognized rank symbol is the one genuine error condition and
    /// fails the whole evaluation atomically.
    fn decide(&self, state: &GameState) -> Result<Action, EngineError>;

    /// Return the name/identifier of this strategy implementation.
    fn name(&self) -> &str;
}

/// Factory function to create strategies by type string.
///
/// # Supported Strategy Types
///
/// - `"baseline"` - The fixed rule-based baseline strategy
///
/// # Example
///
/// ```rust
/// use tripoker_ai::{create_strategy, Strategy};
///
/// let strategy = create_strategy("baseline").unwrap();
/// assert_eq!(strategy.name(), "BaselineStrategy");
///
/// assert!(create_strategy("gto").is_err());
/// ```
pub fn create_strategy(kind: &str) -> Result<Box<dyn Strategy>, String> {
    match kind {
        "baseline" => Ok(Box::new(baseline::BaselineStrategy::new())),
        _ => Err(format!("Unknown strategy type: {}", kind)),
    }
}
