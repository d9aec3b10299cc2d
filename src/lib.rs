// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Venture: a deterministic engine for a turn-based startup-economy board game.
//!
//! This crate provides the rules engine for a startup-themed board game:
//! - A fixed map of purchasable areas with position-based pricing
//! - Business upgrades, opportunity card draws, and a four-category score ledger
//! - Deterministic, seedable matches with pluggable action sources
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │        Session Runner               │
//! ├─────────────────────────────────────┤
//! │         Rules Engine                │
//! ├─────────────────────────────────────┤
//! │    Map · Players · Deck · Rng       │
//! └─────────────────────────────────────┘
//! ```

pub mod game;
pub mod render;
pub mod rng;
pub mod session;

pub use rng::Rng;

// Re-export key types at crate root for convenience
pub use game::{
    Action, ActionError, ActionKind, Area, AreaId, Card, Deck, GameState, Map, Outcome, Player,
    PlayerId, ScoreCategory, Scores, TurnReport,
};
pub use session::{
    ActionSource, EventSink, GameConfig, MatchResult, PlayerSpec, Session, SessionError, run_match,
};
