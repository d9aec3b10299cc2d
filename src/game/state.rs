//! The rules engine: complete game state and action resolution.

use crate::game::{
    Action, ActionError, AreaId, CARD_BONUS_POINTS, Deck, HAND_SIZE, Map, Outcome, Player,
    PlayerId, ScoreCategory, TurnReport,
};
use crate::rng::Rng;

/// Complete state of one game.
///
/// Fields are open for inspection, but gameplay mutation is expected to go
/// through [`GameState::resolve`] and [`GameState::trade`], which keep area
/// ownership and player portfolios consistent with each other.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The game map.
    pub map: Map,
    /// All players, indexed by seat.
    pub players: Vec<Player>,
    /// The opportunity card pool.
    pub deck: Deck,
    /// Randomness for deck sampling.
    pub rng: Rng,
    /// Seat of the player whose turn it is.
    pub current: PlayerId,
    /// Number of actions resolved so far.
    pub turns_played: u64,
    /// The game ends once any player's total reaches this.
    pub score_threshold: u32,
    /// Business level cap for upgrades.
    pub max_level: u8,
}

impl GameState {
    /// Create a new game with the turn at seat 0.
    #[must_use]
    pub const fn new(
        map: Map,
        players: Vec<Player>,
        deck: Deck,
        rng: Rng,
        score_threshold: u32,
        max_level: u8,
    ) -> Self {
        Self {
            map,
            players,
            deck,
            rng,
            current: 0,
            turns_played: 0,
            score_threshold,
            max_level,
        }
    }

    /// Seat of the player whose turn it is.
    #[must_use]
    pub const fn current_seat(&self) -> PlayerId {
        self.current
    }

    /// Get a player by seat.
    #[must_use]
    pub fn get_player(&self, seat: PlayerId) -> Option<&Player> {
        self.players.get(usize::from(seat))
    }

    /// Get a mutable reference to a player by seat.
    #[must_use]
    pub fn get_player_mut(&mut self, seat: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(usize::from(seat))
    }

    /// Resolve one action for the player whose turn it is.
    ///
    /// Every precondition is checked here; a rejected action changes nothing
    /// except the turn, which always advances by exactly one seat afterwards.
    /// Rejections therefore consume the turn just like successes.
    ///
    /// # Panics
    ///
    /// Panics if the current seat does not index a player, which indicates a
    /// corrupted state, not a bad move.
    pub fn resolve(&mut self, action: Action) -> TurnReport {
        let seat = self.current;
        let turn = self.turns_played;

        let outcome = match action {
            Action::BuyArea { area } => self.resolve_buy(seat, area),
            Action::UpgradeBusiness { area } => self.resolve_upgrade(seat, area),
            Action::DrawOpportunity { choice } => self.resolve_draw(seat, choice),
            Action::EndTurn => Outcome::Passed,
        };

        let actor = self.actor(seat);
        let report = TurnReport {
            turn,
            seat,
            actor: actor.name.clone(),
            action: action.kind(),
            outcome,
            balance: actor.balance,
            total_points: actor.total_points(),
        };

        self.advance_turn();
        report
    }

    fn resolve_buy(&mut self, seat: PlayerId, area_id: AreaId) -> Outcome {
        if self.map.unowned().next().is_none() {
            return Outcome::Rejected(ActionError::NothingToBuy);
        }

        let cost = match self.map.get(area_id) {
            Some(area) if area.owner().is_none() => area.cost(),
            _ => return Outcome::Rejected(ActionError::AreaUnavailable { area: area_id }),
        };

        let available = self.actor(seat).balance;
        if available < cost {
            return Outcome::Rejected(ActionError::InsufficientFunds {
                needed: cost,
                available,
            });
        }

        if let Some(area) = self.map.get_mut(area_id) {
            area.set_owner(Some(seat));
        }
        let player = self.actor_mut(seat);
        player.balance -= cost;
        player.areas.insert(area_id);
        player.scores.add(ScoreCategory::Expansion, 1);

        Outcome::Purchased {
            area: area_id,
            cost,
        }
    }

    fn resolve_upgrade(&mut self, seat: PlayerId, area_id: AreaId) -> Outcome {
        if self.actor(seat).areas.is_empty() {
            return Outcome::Rejected(ActionError::NoAreasOwned);
        }

        let (cost, level) = match self.map.get(area_id) {
            Some(area) if area.owner() == Some(seat) => (area.upgrade_cost(), area.level()),
            _ => return Outcome::Rejected(ActionError::NotYourArea { area: area_id }),
        };
        if level >= self.max_level {
            return Outcome::Rejected(ActionError::LevelCapReached { area: area_id });
        }

        let available = self.actor(seat).balance;
        if available < cost {
            return Outcome::Rejected(ActionError::InsufficientFunds {
                needed: cost,
                available,
            });
        }

        let max_level = self.max_level;
        let new_level = self.map.get_mut(area_id).map_or(level, |area| {
            area.upgrade(max_level);
            area.level()
        });
        let player = self.actor_mut(seat);
        player.balance -= cost;
        player.scores.add(ScoreCategory::Valuation, 1);

        Outcome::Upgraded {
            area: area_id,
            cost,
            level: new_level,
        }
    }

    fn resolve_draw(&mut self, seat: PlayerId, choice: u8) -> Outcome {
        if choice == 0 || usize::from(choice) > HAND_SIZE {
            return Outcome::Rejected(ActionError::InvalidCardChoice { choice });
        }

        let hand = self.deck.draw(&mut self.rng);
        let player = self.actor_mut(seat);
        player.scores.add(ScoreCategory::Bonus, CARD_BONUS_POINTS);

        Outcome::Drew {
            hand,
            choice,
            points: CARD_BONUS_POINTS,
        }
    }

    /// Reassign an area from one player to another.
    ///
    /// An engine-level transfer with no turn cost; it is not part of the
    /// per-turn action set. The transfer is applied only when `from`
    /// currently owns the area and `to` is a real seat; any other combination
    /// of arguments leaves everything untouched.
    ///
    /// Returns `true` when the transfer was applied.
    pub fn trade(&mut self, from: PlayerId, to: PlayerId, area_id: AreaId) -> bool {
        let from_owns = self
            .map
            .get(area_id)
            .is_some_and(|area| area.owner() == Some(from));
        if !from_owns || usize::from(to) >= self.players.len() {
            return false;
        }

        if let Some(player) = self.get_player_mut(from) {
            player.areas.remove(&area_id);
        }
        if let Some(player) = self.get_player_mut(to) {
            player.areas.insert(area_id);
        }
        if let Some(area) = self.map.get_mut(area_id) {
            area.set_owner(Some(to));
        }
        true
    }

    /// Whether the game has ended.
    ///
    /// The game runs while every total is below the score threshold and ends
    /// as soon as any player reaches it. Checked between turns, never in the
    /// middle of resolving an action.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.players
            .iter()
            .any(|player| player.total_points() >= self.score_threshold)
    }

    /// The player with the strictly highest total.
    ///
    /// Equal totals go to the earliest seat in turn order; the tie-break is
    /// deliberate but arbitrary.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        let mut best: Option<&Player> = None;
        for player in &self.players {
            if best.is_none_or(|b| player.total_points() > b.total_points()) {
                best = Some(player);
            }
        }
        best
    }

    fn advance_turn(&mut self) {
        self.turns_played += 1;
        self.current = if usize::from(self.current) + 1 >= self.players.len() {
            0
        } else {
            self.current + 1
        };
    }

    fn actor(&self, seat: PlayerId) -> &Player {
        let idx = usize::from(seat);
        assert!(idx < self.players.len(), "seat {seat} out of range");
        &self.players[idx]
    }

    fn actor_mut(&mut self, seat: PlayerId) -> &mut Player {
        let idx = usize::from(seat);
        assert!(idx < self.players.len(), "seat {seat} out of range");
        &mut self.players[idx]
    }
}
