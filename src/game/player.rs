//! Players, the score ledger, and its categories.

use std::collections::BTreeSet;
use std::fmt;

use crate::game::AreaId;

/// A player's seat in turn order, 0-indexed.
pub type PlayerId = u8;

/// The score categories.
///
/// The set is closed: a name outside these four is not a category. `Impact`
/// exists in the ledger but no current rule awards it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreCategory {
    /// Reserved for future rules; nothing awards it today.
    Impact,
    /// Awarded for upgrading a business.
    Valuation,
    /// Awarded for buying an area.
    Expansion,
    /// Awarded for drawing an opportunity card.
    Bonus,
}

impl ScoreCategory {
    /// All categories, in ledger order.
    pub const ALL: [Self; 4] = [Self::Impact, Self::Valuation, Self::Expansion, Self::Bonus];

    /// Parse a category from its display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Impact" => Some(Self::Impact),
            "Valuation" => Some(Self::Valuation),
            "Expansion" => Some(Self::Expansion),
            "Bonus" => Some(Self::Bonus),
            _ => None,
        }
    }

    /// Display name of this category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Impact => "Impact",
            Self::Valuation => "Valuation",
            Self::Expansion => "Expansion",
            Self::Bonus => "Bonus",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Impact => 0,
            Self::Valuation => 1,
            Self::Expansion => 2,
            Self::Bonus => 3,
        }
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-category point accumulators for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    points: [u32; 4],
}

impl Scores {
    /// Add points to a category.
    ///
    /// Negative amounts subtract; accumulators saturate at zero rather than
    /// going negative.
    pub fn add(&mut self, category: ScoreCategory, amount: i32) {
        let slot = &mut self.points[category.index()];
        *slot = slot.saturating_add_signed(amount);
    }

    /// Add points to a category given by display name.
    ///
    /// Unrecognized names are ignored.
    pub fn add_named(&mut self, name: &str, amount: i32) {
        if let Some(category) = ScoreCategory::from_name(name) {
            self.add(category, amount);
        }
    }

    /// Points accumulated in a category.
    #[must_use]
    pub const fn get(&self, category: ScoreCategory) -> u32 {
        self.points[category.index()]
    }

    /// Sum of all categories.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.points
            .iter()
            .fold(0u32, |acc, &points| acc.saturating_add(points))
    }
}

/// State for a single player.
#[derive(Debug, Clone)]
pub struct Player {
    /// Seat number, fixed for the whole game.
    pub seat: PlayerId,
    /// Unique display name.
    pub name: String,
    /// Display color used by renderers.
    pub color: String,
    /// Currency balance. Engine actions never drive it negative.
    pub balance: u32,
    /// Ids of owned areas, kept in id order.
    pub areas: BTreeSet<AreaId>,
    /// Per-category score ledger.
    pub scores: Scores,
}

impl Player {
    /// Create a new player with an empty portfolio and zero points.
    #[must_use]
    pub fn new(
        seat: PlayerId,
        name: impl Into<String>,
        color: impl Into<String>,
        balance: u32,
    ) -> Self {
        Self {
            seat,
            name: name.into(),
            color: color.into(),
            balance,
            areas: BTreeSet::new(),
            scores: Scores::default(),
        }
    }

    /// Whether this player owns the given area.
    #[must_use]
    pub fn owns(&self, area: AreaId) -> bool {
        self.areas.contains(&area)
    }

    /// Sum of this player's points across all categories.
    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.scores.total()
    }
}
