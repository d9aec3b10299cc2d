//! Actions, rejection reasons, and the per-turn outcome record.

use std::fmt;

use crate::game::{AreaId, Card, HAND_SIZE, PlayerId};

/// Points awarded for drawing an opportunity card.
pub const CARD_BONUS_POINTS: i32 = 5;

/// One action submitted for the acting player's turn.
///
/// Parameters come from outside the engine and are never trusted; resolution
/// checks every precondition itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Buy an ownerless area.
    BuyArea {
        /// Target area id.
        area: AreaId,
    },
    /// Upgrade the business on an owned area.
    UpgradeBusiness {
        /// Target area id.
        area: AreaId,
    },
    /// Draw three opportunity cards and keep one.
    DrawOpportunity {
        /// 1-based position of the kept card in the presented hand.
        choice: u8,
    },
    /// Pass the turn.
    EndTurn,
}

impl Action {
    /// The kind of this action, without its parameters.
    #[must_use]
    pub const fn kind(self) -> ActionKind {
        match self {
            Self::BuyArea { .. } => ActionKind::BuyArea,
            Self::UpgradeBusiness { .. } => ActionKind::UpgradeBusiness,
            Self::DrawOpportunity { .. } => ActionKind::DrawOpportunity,
            Self::EndTurn => ActionKind::EndTurn,
        }
    }
}

/// Action kinds, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Buy an area.
    BuyArea,
    /// Upgrade a business.
    UpgradeBusiness,
    /// Draw opportunity cards.
    DrawOpportunity,
    /// Pass the turn.
    EndTurn,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BuyArea => "buy area",
            Self::UpgradeBusiness => "upgrade business",
            Self::DrawOpportunity => "draw opportunity",
            Self::EndTurn => "end turn",
        };
        f.write_str(name)
    }
}

/// Why an action was rejected.
///
/// Rejections are ordinary game outcomes, not engine failures: the turn is
/// still consumed and nothing else changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    /// Every area on the map already has an owner.
    NothingToBuy,
    /// Buy target does not exist or already has an owner.
    AreaUnavailable {
        /// Target area id.
        area: AreaId,
    },
    /// The actor cannot afford the purchase or upgrade.
    InsufficientFunds {
        /// Price of the attempted move.
        needed: u32,
        /// Actor balance at the time.
        available: u32,
    },
    /// Upgrade attempted with an empty portfolio.
    NoAreasOwned,
    /// Upgrade target is not owned by the actor.
    NotYourArea {
        /// Target area id.
        area: AreaId,
    },
    /// Upgrade target is already at the maximum business level.
    LevelCapReached {
        /// Target area id.
        area: AreaId,
    },
    /// Draw choice outside the presented hand.
    InvalidCardChoice {
        /// The out-of-range 1-based choice.
        choice: u8,
    },
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingToBuy => write!(f, "no areas left to buy"),
            Self::AreaUnavailable { area } => write!(f, "area {area} is not available"),
            Self::InsufficientFunds { needed, available } => {
                write!(f, "need ${needed}, have ${available}")
            }
            Self::NoAreasOwned => write!(f, "no areas owned to upgrade"),
            Self::NotYourArea { area } => write!(f, "area {area} is not yours"),
            Self::LevelCapReached { area } => {
                write!(f, "area {area} is already at the maximum level")
            }
            Self::InvalidCardChoice { choice } => {
                write!(f, "card choice {choice} is out of range")
            }
        }
    }
}

impl std::error::Error for ActionError {}

/// What a resolved action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Area purchased.
    Purchased {
        /// The purchased area.
        area: AreaId,
        /// Price paid.
        cost: u32,
    },
    /// Business upgraded.
    Upgraded {
        /// The upgraded area.
        area: AreaId,
        /// Price paid.
        cost: u32,
        /// Business level after the upgrade.
        level: u8,
    },
    /// Opportunity cards drawn.
    Drew {
        /// The presented hand.
        hand: [Card; HAND_SIZE],
        /// 1-based position of the kept card.
        choice: u8,
        /// Bonus points awarded.
        points: i32,
    },
    /// Turn passed without a move.
    Passed,
    /// Action rejected; only the turn advanced.
    Rejected(ActionError),
}

impl Outcome {
    /// Whether the action went through.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

/// Structured record of one resolved turn.
///
/// The engine emits one report per action, success or rejection, for
/// presentation layers to render or log.
#[derive(Debug, Clone)]
pub struct TurnReport {
    /// Sequential turn number, starting at 0.
    pub turn: u64,
    /// Seat of the acting player.
    pub seat: PlayerId,
    /// Name of the acting player.
    pub actor: String,
    /// Kind of the submitted action.
    pub action: ActionKind,
    /// What happened.
    pub outcome: Outcome,
    /// Actor balance after resolution.
    pub balance: u32,
    /// Actor total points after resolution.
    pub total_points: u32,
}
