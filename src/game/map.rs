//! The game map: a fixed strip of purchasable areas.

use crate::game::{Area, AreaId, BASE_COST, COST_STEP, PlayerId};

/// The game map.
///
/// Areas are stored in id order and never added or removed after generation.
#[derive(Debug, Clone)]
pub struct Map {
    areas: Vec<Area>,
}

impl Map {
    /// Generate a map of `size` areas.
    ///
    /// Area `i` costs `BASE_COST + COST_STEP * i`, and exactly one area, at
    /// position `size / 2`, carries the center bonus marker.
    ///
    /// Returns `None` when `size` is 0.
    #[must_use]
    pub fn generate(size: u16) -> Option<Self> {
        if size == 0 {
            return None;
        }

        let center = size / 2;
        let areas = (0..size)
            .map(|i| Area::new(i, BASE_COST + COST_STEP * u32::from(i), i == center))
            .collect();

        Some(Self { areas })
    }

    /// Number of areas on the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Whether the map has no areas. Never true for a generated map.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Get the area with the given id.
    #[must_use]
    pub fn get(&self, id: AreaId) -> Option<&Area> {
        self.areas.get(usize::from(id))
    }

    /// Get a mutable reference to the area with the given id.
    #[must_use]
    pub fn get_mut(&mut self, id: AreaId) -> Option<&mut Area> {
        self.areas.get_mut(usize::from(id))
    }

    /// Iterate over all areas in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Area> {
        self.areas.iter()
    }

    /// Iterate over areas nobody owns yet.
    pub fn unowned(&self) -> impl Iterator<Item = &Area> {
        self.areas.iter().filter(|area| area.owner().is_none())
    }

    /// Iterate over areas owned by the given player.
    pub fn owned_by(&self, player: PlayerId) -> impl Iterator<Item = &Area> {
        self.areas
            .iter()
            .filter(move |area| area.owner() == Some(player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_price_schedule() {
        let map = Map::generate(7).unwrap();

        let costs: Vec<u32> = map.iter().map(Area::cost).collect();
        assert_eq!(costs, vec![100, 150, 200, 250, 300, 350, 400]);
    }

    #[test]
    fn test_generate_single_center() {
        let map = Map::generate(7).unwrap();

        let centers: Vec<AreaId> = map
            .iter()
            .filter(|area| area.has_center_bonus())
            .map(Area::id)
            .collect();
        assert_eq!(centers, vec![3]);
    }

    #[test]
    fn test_generate_center_even_size() {
        let map = Map::generate(8).unwrap();

        assert!(map.get(4).unwrap().has_center_bonus());
        assert_eq!(map.iter().filter(|a| a.has_center_bonus()).count(), 1);
    }

    #[test]
    fn test_generate_size_one() {
        let map = Map::generate(1).unwrap();

        assert_eq!(map.len(), 1);
        assert!(map.get(0).unwrap().has_center_bonus());
        assert_eq!(map.get(0).unwrap().cost(), 100);
    }

    #[test]
    fn test_generate_zero_size_rejected() {
        assert!(Map::generate(0).is_none());
    }

    #[test]
    fn test_get_out_of_range() {
        let map = Map::generate(7).unwrap();

        assert!(map.get(7).is_none());
        assert!(map.get(AreaId::MAX).is_none());
    }

    #[test]
    fn test_ownership_filters() {
        let mut map = Map::generate(5).unwrap();
        map.get_mut(1).unwrap().set_owner(Some(0));
        map.get_mut(3).unwrap().set_owner(Some(1));

        assert_eq!(map.unowned().count(), 3);
        let mine: Vec<AreaId> = map.owned_by(0).map(Area::id).collect();
        assert_eq!(mine, vec![1]);
        assert_eq!(map.owned_by(2).count(), 0);
    }
}
