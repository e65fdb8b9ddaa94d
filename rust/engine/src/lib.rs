//! # tripoker-engine: Three-Card Poker Decision Core
//!
//! A deterministic evaluation core for a simplified three-card poker game:
//! two private hole cards plus one shared table card. Provides card parsing,
//! three-card hand classification, the game-state model, and decision
//! logging for reproducible analysis and debugging.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Rank, Card) and token parsing
//! - [`hand`] - Three-card hand classification into ordered categories
//! - [`state`] - Game state input model and the action result type
//! - [`logger`] - Decision logging and DecisionRecord serialization
//! - [`errors`] - Error types for card parsing
//!
//! ## Quick Start
//!
//! ```rust
//! use tripoker_engine::cards::Card;
//! use tripoker_engine::hand::{hand_category, Category};
//!
//! // Classify a three-card hand (two hole cards plus the table card)
//! let hole = [Card::parse("AH").unwrap(), Card::parse("KH").unwrap()];
//! let table = Card::parse("QH").unwrap();
//!
//! let category = hand_category(hole, table);
//! assert_eq!(category, Category::StraightFlush);
//! ```
//!
//! ## Deterministic Evaluation
//!
//! Every evaluation is a pure function of its input: the same hole and table
//! cards always produce the same category, regardless of card order.
//!
//! ```rust
//! use tripoker_engine::state::GameState;
//!
//! let state = GameState::from_json(r#"{"your_hole":["2C","2D"],"table_card":"9S"}"#);
//! assert!(state.is_complete());
//! ```

pub mod cards;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod state;
