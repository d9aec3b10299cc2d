//! Areas: the purchasable districts on the map.

use crate::game::PlayerId;

/// Unique identifier for an area. Doubles as its position on the map.
pub type AreaId = u16;

/// Purchase price of the area at position 0.
pub const BASE_COST: u32 = 100;

/// Price increase per map position.
pub const COST_STEP: u32 = 50;

/// Upgrade price per current business level.
pub const UPGRADE_COST_PER_LEVEL: u32 = 200;

/// A single purchasable area.
///
/// Areas start unowned at business level 1. Ownership and level only change
/// through the engine, which keeps the owning player's portfolio in sync.
#[derive(Debug, Clone, Copy)]
pub struct Area {
    id: AreaId,
    cost: u32,
    owner: Option<PlayerId>,
    level: u8,
    center_bonus: bool,
}

impl Area {
    /// Create a new unowned area at business level 1.
    #[must_use]
    pub const fn new(id: AreaId, cost: u32, center_bonus: bool) -> Self {
        Self {
            id,
            cost,
            owner: None,
            level: 1,
            center_bonus,
        }
    }

    /// Identifier of this area.
    #[must_use]
    pub const fn id(&self) -> AreaId {
        self.id
    }

    /// One-time purchase price.
    #[must_use]
    pub const fn cost(&self) -> u32 {
        self.cost
    }

    /// Current owner, if any.
    #[must_use]
    pub const fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Current business level.
    #[must_use]
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// Whether this area carries the center bonus marker.
    #[must_use]
    pub const fn has_center_bonus(&self) -> bool {
        self.center_bonus
    }

    /// Price of the next upgrade at the current level.
    #[must_use]
    pub fn upgrade_cost(&self) -> u32 {
        UPGRADE_COST_PER_LEVEL * u32::from(self.level)
    }

    /// Assign or clear the owner.
    pub fn set_owner(&mut self, owner: Option<PlayerId>) {
        self.owner = owner;
    }

    /// Raise the business level by one.
    ///
    /// Returns `false` without mutating if the level is already at
    /// `max_level`.
    pub fn upgrade(&mut self, max_level: u8) -> bool {
        if self.level >= max_level {
            return false;
        }
        self.level += 1;
        true
    }
}

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Prove the upgrade price never overflows, whatever the level.
    #[kani::proof]
    fn prove_upgrade_cost_bounded() {
        let level: u8 = kani::any();
        let mut area = Area::new(0, BASE_COST, false);
        area.level = level;

        let cost = area.upgrade_cost();
        assert!(cost <= UPGRADE_COST_PER_LEVEL * 255);
    }

    /// Prove an upgrade never pushes the level past the cap.
    #[kani::proof]
    fn prove_level_respects_cap() {
        let level: u8 = kani::any();
        let max_level: u8 = kani::any();
        kani::assume(level >= 1);
        kani::assume(level <= max_level);

        let mut area = Area::new(0, BASE_COST, false);
        area.level = level;
        let _ = area.upgrade(max_level);

        assert!(area.level >= 1);
        assert!(area.level <= max_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_area_defaults() {
        let area = Area::new(3, 250, true);

        assert_eq!(area.id(), 3);
        assert_eq!(area.cost(), 250);
        assert_eq!(area.owner(), None);
        assert_eq!(area.level(), 1);
        assert!(area.has_center_bonus());
    }

    #[test]
    fn test_upgrade_cost_scales_with_level() {
        let mut area = Area::new(0, 100, false);
        assert_eq!(area.upgrade_cost(), 200);

        assert!(area.upgrade(5));
        assert_eq!(area.upgrade_cost(), 400);

        assert!(area.upgrade(5));
        assert_eq!(area.upgrade_cost(), 600);
    }

    #[test]
    fn test_upgrade_stops_at_cap() {
        let mut area = Area::new(0, 100, false);

        assert!(area.upgrade(3));
        assert!(area.upgrade(3));
        assert_eq!(area.level(), 3);

        assert!(!area.upgrade(3));
        assert_eq!(area.level(), 3);
    }

    #[test]
    fn test_upgrade_cap_of_one_blocks_everything() {
        let mut area = Area::new(0, 100, false);

        assert!(!area.upgrade(1));
        assert_eq!(area.level(), 1);
    }

    #[test]
    fn test_set_owner() {
        let mut area = Area::new(0, 100, false);

        area.set_owner(Some(2));
        assert_eq!(area.owner(), Some(2));

        area.set_owner(None);
        assert_eq!(area.owner(), None);
    }
}
