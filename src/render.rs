//! ANSI rendering of the board and standings for terminal play.

use crate::game::{GameState, ScoreCategory};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const GRAY: &str = "\x1b[90m";

/// Color names renderers understand, with their ANSI codes.
const NAMED_COLORS: [(&str, &str); 8] = [
    ("Red", "\x1b[31m"),
    ("Green", "\x1b[32m"),
    ("Yellow", "\x1b[33m"),
    ("Blue", "\x1b[34m"),
    ("Magenta", "\x1b[35m"),
    ("Cyan", "\x1b[36m"),
    ("White", "\x1b[37m"),
    ("Gray", "\x1b[90m"),
];

/// Map a player's display color to an ANSI code.
///
/// Unknown color names render uncolored.
fn color_code(color: &str) -> &'static str {
    NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(color))
        .map_or("", |(_, code)| code)
}

struct BoardCell {
    id: String,
    cost: String,
    level: String,
    initial: char,
    color: &'static str,
}

/// Render the map as a strip of area cells.
///
/// Each cell shows the area id (with `*` marking the center bonus), the
/// purchase price, and the business level next to the owner's initial in
/// their color, `-` when unowned.
#[must_use]
pub fn render_board(state: &GameState) -> String {
    let cells: Vec<BoardCell> = state
        .map
        .iter()
        .map(|area| {
            let marker = if area.has_center_bonus() { "*" } else { "" };
            let (initial, color) = match area.owner().and_then(|seat| state.get_player(seat)) {
                Some(player) => (
                    player.name.chars().next().unwrap_or('?'),
                    color_code(&player.color),
                ),
                None => ('-', GRAY),
            };
            BoardCell {
                id: format!("#{}{marker}", area.id()),
                cost: format!("${}", area.cost()),
                level: format!("L{}", area.level()),
                initial,
                color,
            }
        })
        .collect();

    let width = cells
        .iter()
        .map(|cell| {
            cell.id
                .len()
                .max(cell.cost.len())
                .max(cell.level.len() + 2)
        })
        .max()
        .unwrap_or(4)
        + 2;

    let mut output = String::new();
    render_border(&mut output, '┌', '┬', '┐', width, cells.len());

    output.push('│');
    for cell in &cells {
        push_centered(&mut output, &cell.id, width);
        output.push('│');
    }
    output.push('\n');

    output.push('│');
    for cell in &cells {
        push_centered(&mut output, &cell.cost, width);
        output.push('│');
    }
    output.push('\n');

    // Owner initial is colored, so pad by visible length
    output.push('│');
    for cell in &cells {
        let visible = cell.level.len() + 2;
        let pad = width.saturating_sub(visible);
        let left = pad / 2;
        for _ in 0..left {
            output.push(' ');
        }
        output.push_str(&cell.level);
        output.push(' ');
        output.push_str(cell.color);
        output.push(cell.initial);
        output.push_str(RESET);
        for _ in 0..(pad - left) {
            output.push(' ');
        }
        output.push('│');
    }
    output.push('\n');

    render_border(&mut output, '└', '┴', '┘', width, cells.len());
    output
}

/// Render the standings: one line per player with balance, per-category
/// points, and the total. `>` marks the seat whose turn it is.
#[must_use]
pub fn render_standings(state: &GameState) -> String {
    let name_width = state
        .players
        .iter()
        .map(|player| player.name.len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for player in &state.players {
        let marker = if player.seat == state.current_seat() {
            '>'
        } else {
            ' '
        };
        output.push(marker);
        output.push(' ');
        output.push_str(color_code(&player.color));
        output.push_str(&format!("{:<name_width$}", player.name));
        output.push_str(RESET);
        output.push_str(&format!("  ${:<7}", player.balance));
        for category in ScoreCategory::ALL {
            output.push_str(&format!("  {category}: {}", player.scores.get(category)));
        }
        output.push_str(&format!(
            "  {BOLD}Total: {}{RESET}\n",
            player.total_points()
        ));
    }
    output
}

fn push_centered(output: &mut String, text: &str, width: usize) {
    let pad = width.saturating_sub(text.len());
    let left = pad / 2;
    for _ in 0..left {
        output.push(' ');
    }
    output.push_str(text);
    for _ in 0..(pad - left) {
        output.push(' ');
    }
}

fn render_border(
    output: &mut String,
    left: char,
    mid: char,
    right: char,
    width: usize,
    count: usize,
) {
    output.push(left);
    for i in 0..count {
        for _ in 0..width {
            output.push('─');
        }
        output.push(if i + 1 == count { right } else { mid });
    }
    output.push('\n');
}
