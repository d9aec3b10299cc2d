//! Session running: configuration, the turn loop, and result collection.
//!
//! A session wires a [`GameState`] to an [`ActionSource`] that supplies one
//! action per turn and an [`EventSink`] that receives one outcome record per
//! turn. Everything a player submits flows through engine validation; sources
//! are never trusted to pre-check anything.

use std::collections::VecDeque;

use crate::game::{
    Action, Deck, GameState, Map, Player, PlayerId, ScoreCategory, TurnReport, assert_invariants,
};
use crate::rng::Rng;

/// Maximum number of seats at the table. Seat ids are a `u8`.
pub const MAX_PLAYERS: usize = 255;

/// Configuration for a game session.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    /// Number of areas on the map.
    pub map_size: u16,
    /// Balance every player starts with.
    pub starting_balance: u32,
    /// The game ends once any player's total reaches this.
    pub score_threshold: u32,
    /// Business level cap for upgrades.
    pub max_level: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            map_size: 7,
            starting_balance: 1000,
            score_threshold: 50,
            max_level: 5,
        }
    }
}

impl GameConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the map would be empty, the threshold could never
    /// end a game, or the level cap would sit below the starting level.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.map_size == 0 {
            return Err(SessionError::InvalidMapSize(self.map_size));
        }
        if self.score_threshold == 0 {
            return Err(SessionError::InvalidThreshold(self.score_threshold));
        }
        if self.max_level == 0 {
            return Err(SessionError::InvalidMaxLevel(self.max_level));
        }
        Ok(())
    }
}

/// Name and display color for one seat, in turn order.
#[derive(Debug, Clone)]
pub struct PlayerSpec {
    /// Unique display name.
    pub name: String,
    /// Display color used by renderers.
    pub color: String,
}

impl PlayerSpec {
    /// Create a new player spec.
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Error type for session setup and execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Map size must be at least 1.
    InvalidMapSize(u16),
    /// Score threshold must be at least 1.
    InvalidThreshold(u32),
    /// Maximum business level must be at least 1.
    InvalidMaxLevel(u8),
    /// At least one player is required.
    NoPlayers,
    /// More players than available seats.
    TooManyPlayers(usize),
    /// Two players share a display name.
    DuplicatePlayerName(String),
    /// The action source could not produce an action.
    OutOfActions,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMapSize(size) => {
                write!(f, "invalid map size {size}, need at least 1 area")
            }
            Self::InvalidThreshold(threshold) => {
                write!(f, "invalid score threshold {threshold}, need at least 1")
            }
            Self::InvalidMaxLevel(level) => {
                write!(f, "invalid maximum level {level}, need at least 1")
            }
            Self::NoPlayers => write!(f, "need at least one player"),
            Self::TooManyPlayers(count) => {
                write!(f, "{count} players exceeds the {MAX_PLAYERS} seat limit")
            }
            Self::DuplicatePlayerName(name) => {
                write!(f, "duplicate player name '{name}'")
            }
            Self::OutOfActions => write!(f, "action source ran out of actions"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Supplies one action per turn for the player to move.
pub trait ActionSource {
    /// Produce the next action for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns an error if no action can be produced, which aborts the
    /// session.
    fn next_action(&mut self, state: &GameState) -> Result<Action, SessionError>;
}

/// Receives structured outcome records as the session progresses.
pub trait EventSink {
    /// Called once per resolved action.
    fn on_turn(&mut self, state: &GameState, report: &TurnReport);

    /// Called once when the game ends.
    fn on_finish(&mut self, state: &GameState, result: &MatchResult);
}

/// Action source replaying a fixed list of actions.
///
/// Used by tests and scripted matches. Yields
/// [`SessionError::OutOfActions`] once the list is exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    actions: VecDeque<Action>,
}

impl ScriptedSource {
    /// Create a source yielding the given actions in order.
    #[must_use]
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    /// Number of actions left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

impl ActionSource for ScriptedSource {
    fn next_action(&mut self, _state: &GameState) -> Result<Action, SessionError> {
        self.actions.pop_front().ok_or(SessionError::OutOfActions)
    }
}

/// Event sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn on_turn(&mut self, _state: &GameState, _report: &TurnReport) {}
    fn on_finish(&mut self, _state: &GameState, _result: &MatchResult) {}
}

/// Final summary for one player.
#[derive(Debug, Clone)]
pub struct PlayerSummary {
    /// Seat number.
    pub seat: PlayerId,
    /// Display name.
    pub name: String,
    /// Final balance.
    pub balance: u32,
    /// Final points per category, in [`ScoreCategory::ALL`] order.
    pub scores: [u32; 4],
    /// Final total points.
    pub total_points: u32,
    /// Number of areas owned at the end.
    pub areas_owned: usize,
}

/// Final result of a completed session.
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// Winning seat.
    pub winner: PlayerId,
    /// Winner's display name.
    pub winner_name: String,
    /// Winner's total points.
    pub winning_total: u32,
    /// Total actions resolved.
    pub turns_played: u64,
    /// Per-player summaries in seat order.
    pub players: Vec<PlayerSummary>,
    /// The seed the session ran with.
    pub seed: u64,
}

/// A configured game session.
///
/// Owns the game state and drives the turn loop against an action source.
#[derive(Debug)]
pub struct Session {
    state: GameState,
    seed: u64,
}

impl Session {
    /// Create a session from a config and player roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the roster is empty,
    /// oversized, or carries duplicate names.
    pub fn new(config: &GameConfig, specs: &[PlayerSpec], seed: u64) -> Result<Self, SessionError> {
        config.validate()?;

        if specs.is_empty() {
            return Err(SessionError::NoPlayers);
        }
        if specs.len() > MAX_PLAYERS {
            return Err(SessionError::TooManyPlayers(specs.len()));
        }
        for (i, spec) in specs.iter().enumerate() {
            if specs[..i].iter().any(|other| other.name == spec.name) {
                return Err(SessionError::DuplicatePlayerName(spec.name.clone()));
            }
        }

        let map =
            Map::generate(config.map_size).ok_or(SessionError::InvalidMapSize(config.map_size))?;
        let players = specs
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                #[allow(clippy::cast_possible_truncation)]
                let seat = i as PlayerId;
                Player::new(
                    seat,
                    spec.name.as_str(),
                    spec.color.as_str(),
                    config.starting_balance,
                )
            })
            .collect();

        let state = GameState::new(
            map,
            players,
            Deck::generate(),
            Rng::new(seed),
            config.score_threshold,
            config.max_level,
        );

        Ok(Self { state, seed })
    }

    /// Read-only access to the game state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// The seed this session was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Run the session to completion.
    ///
    /// Pulls one action per turn from `source`, resolves it, reports the
    /// outcome to `sink`, and checks for termination between turns.
    ///
    /// # Errors
    ///
    /// Returns an error if the action source fails. The game state keeps all
    /// progress made up to that point.
    pub fn run<S: ActionSource, E: EventSink>(
        &mut self,
        source: &mut S,
        sink: &mut E,
    ) -> Result<MatchResult, SessionError> {
        while !self.state.is_over() {
            let action = source.next_action(&self.state)?;
            let report = self.state.resolve(action);
            assert_invariants(&self.state);
            sink.on_turn(&self.state, &report);
        }

        let result = self.build_result();
        sink.on_finish(&self.state, &result);
        Ok(result)
    }

    fn build_result(&self) -> MatchResult {
        let players = self
            .state
            .players
            .iter()
            .map(|player| PlayerSummary {
                seat: player.seat,
                name: player.name.clone(),
                balance: player.balance,
                scores: std::array::from_fn(|i| player.scores.get(ScoreCategory::ALL[i])),
                total_points: player.total_points(),
                areas_owned: player.areas.len(),
            })
            .collect();

        let (winner, winner_name, winning_total) = self
            .state
            .winner()
            .map_or((0, String::new(), 0), |player| {
                (player.seat, player.name.clone(), player.total_points())
            });

        MatchResult {
            winner,
            winner_name,
            winning_total,
            turns_played: self.state.turns_played,
            players,
            seed: self.seed,
        }
    }
}

/// Run a complete scripted match from config to result.
///
/// Convenience wrapper over [`Session::new`] and [`Session::run`].
///
/// # Errors
///
/// Returns an error if the session cannot be constructed or the source runs
/// dry before the game ends.
pub fn run_match<S: ActionSource, E: EventSink>(
    config: &GameConfig,
    specs: &[PlayerSpec],
    seed: u64,
    source: &mut S,
    sink: &mut E,
) -> Result<MatchResult, SessionError> {
    let mut session = Session::new(config, specs, seed)?;
    session.run(source, sink)
}
