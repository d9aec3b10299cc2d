//! Game layer for Venture.
//!
//! Implements the board game rules:
//! - Map of purchasable areas with a position-based price schedule
//! - Players with balances, portfolios, and a four-category score ledger
//! - Opportunity deck with uniform three-card sampling
//! - Turn-based action resolution with an unconditional turn advance

mod action;
mod area;
mod deck;
mod invariants;
mod map;
mod player;
mod state;

pub use action::{Action, ActionError, ActionKind, CARD_BONUS_POINTS, Outcome, TurnReport};
pub use area::{Area, AreaId, BASE_COST, COST_STEP, UPGRADE_COST_PER_LEVEL};
pub use deck::{Card, DECK_SIZE, Deck, HAND_SIZE};
pub use invariants::{InvariantViolation, assert_invariants, check_invariants};
pub use map::Map;
pub use player::{Player, PlayerId, ScoreCategory, Scores};
pub use state::GameState;
