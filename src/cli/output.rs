//! Output formatting utilities for CLI.

use serde::Serialize;
use venture::game::ScoreCategory;
use venture::session::MatchResult;

/// JSON-serializable match result.
#[derive(Debug, Serialize)]
pub(super) struct JsonMatchResult {
    /// Random seed used.
    pub(super) seed: u64,
    /// Winning seat (0-based).
    pub(super) winner: u8,
    /// Winner display name.
    pub(super) winner_name: String,
    /// Winner total points.
    pub(super) winning_total: u32,
    /// Total turns played.
    pub(super) turns_played: u64,
    /// Per-player results.
    pub(super) players: Vec<JsonPlayerResult>,
}

/// JSON-serializable player result.
#[derive(Debug, Serialize)]
pub(super) struct JsonPlayerResult {
    /// Seat number (0-based).
    pub(super) seat: u8,
    /// Display name.
    pub(super) name: String,
    /// Final balance.
    pub(super) balance: u32,
    /// Impact points.
    pub(super) impact: u32,
    /// Valuation points.
    pub(super) valuation: u32,
    /// Expansion points.
    pub(super) expansion: u32,
    /// Bonus points.
    pub(super) bonus: u32,
    /// Total points.
    pub(super) total: u32,
    /// Areas owned at game end.
    pub(super) areas_owned: usize,
}

impl JsonMatchResult {
    /// Create from a MatchResult.
    pub(super) fn from_match_result(result: &MatchResult) -> Self {
        Self {
            seed: result.seed,
            winner: result.winner,
            winner_name: result.winner_name.clone(),
            winning_total: result.winning_total,
            turns_played: result.turns_played,
            players: result
                .players
                .iter()
                .map(|p| JsonPlayerResult {
                    seat: p.seat,
                    name: p.name.clone(),
                    balance: p.balance,
                    impact: p.scores[0],
                    valuation: p.scores[1],
                    expansion: p.scores[2],
                    bonus: p.scores[3],
                    total: p.total_points,
                    areas_owned: p.areas_owned,
                })
                .collect(),
        }
    }
}

/// Format a match result as human-readable text.
pub(super) fn format_text(result: &MatchResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("Match Result (seed: {})\n", result.seed));
    output.push_str(&format!(
        "  Winner: {} with {} points\n",
        result.winner_name, result.winning_total
    ));
    output.push_str(&format!("  Turns: {}\n\n", result.turns_played));

    for player in &result.players {
        output.push_str(&format!(
            "  {}: {} points, ${}, {} areas",
            player.name, player.total_points, player.balance, player.areas_owned
        ));
        let detail: Vec<String> = ScoreCategory::ALL
            .iter()
            .zip(player.scores.iter())
            .map(|(category, points)| format!("{category} {points}"))
            .collect();
        output.push_str(&format!(" ({})\n", detail.join(", ")));
    }

    output
}
