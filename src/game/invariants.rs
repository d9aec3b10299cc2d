//! Game invariants - sanity checks that detect bugs.
//!
//! A correctly implemented engine can never produce any of these states:
//! every mutation keeps area ownership and player portfolios in sync and
//! levels within their range. If a check fires, it indicates a bug in the
//! engine, not a bad player move.

use crate::game::GameState;

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
/// These are bug detectors, not gameplay limits.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    // The turn must point at a real seat
    if usize::from(state.current) >= state.players.len() {
        violations.push(InvariantViolation {
            message: format!(
                "current seat {} out of range for {} players",
                state.current,
                state.players.len()
            ),
        });
    }

    // Exactly one area carries the center bonus marker
    let centers = state.map.iter().filter(|a| a.has_center_bonus()).count();
    if centers != 1 {
        violations.push(InvariantViolation {
            message: format!("map has {centers} center bonus areas, expected exactly 1"),
        });
    }

    for area in state.map.iter() {
        // Levels stay within [1, max_level]
        if area.level() == 0 || area.level() > state.max_level {
            violations.push(InvariantViolation {
                message: format!(
                    "area {} has level {} outside [1, {}]",
                    area.id(),
                    area.level(),
                    state.max_level
                ),
            });
        }

        // Every owner must be a real seat whose portfolio lists the area
        if let Some(owner) = area.owner() {
            match state.get_player(owner) {
                Some(player) if player.owns(area.id()) => {}
                Some(_) => violations.push(InvariantViolation {
                    message: format!(
                        "area {} owned by seat {owner} but missing from their portfolio",
                        area.id()
                    ),
                }),
                None => violations.push(InvariantViolation {
                    message: format!("area {} owned by unknown seat {owner}", area.id()),
                }),
            }
        }
    }

    // Every portfolio entry must be mirrored by the map
    for player in &state.players {
        for &area_id in &player.areas {
            let mirrored = state
                .map
                .get(area_id)
                .is_some_and(|area| area.owner() == Some(player.seat));
            if !mirrored {
                violations.push(InvariantViolation {
                    message: format!(
                        "seat {} portfolio lists area {area_id} they do not own",
                        player.seat
                    ),
                });
            }
        }
    }

    violations
}

/// Assert that all invariants hold, panicking with details if not.
///
/// In debug builds this is called after every resolved action. Release
/// builds skip the check for performance.
///
/// # Panics
///
/// Panics with a detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(state: &GameState) {
    let violations = check_invariants(state);
    assert!(
        violations.is_empty(),
        "Game invariant violations detected:\n{}",
        violations
            .iter()
            .map(std::string::ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_state: &GameState) {}
