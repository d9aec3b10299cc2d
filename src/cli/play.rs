//! Play command implementation.

// Clock-derived seeds take the low bits of a u128 nanosecond count
#![allow(clippy::cast_possible_truncation)]

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use venture::game::{Action, AreaId, GameState, Outcome, TurnReport};
use venture::render::{render_board, render_standings};
use venture::session::{
    ActionSource, EventSink, GameConfig, MatchResult, PlayerSpec, Session, SessionError,
};

use super::output::{JsonMatchResult, format_text};
use super::{CliError, OutputFormat};

/// Default roster when no players are given on the command line.
const DEFAULT_PLAYERS: [(&str, &str); 3] =
    [("Alice", "Red"), ("Bob", "Blue"), ("Charlie", "Green")];

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the player list is malformed, the session cannot be
/// constructed, or stdin closes before the game ends.
pub(crate) fn execute(
    players: &[String],
    seed: Option<u64>,
    config: GameConfig,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    let specs = parse_players(players)?;

    // Generate seed from the clock if not provided
    let seed = seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });

    let mut session = Session::new(&config, &specs, seed)?;

    if !quiet {
        println!("Starting game with seed {seed}");
        println!();
    }

    let mut source = ConsoleSource { quiet };
    let mut sink = ConsoleSink { quiet };
    let result = session.run(&mut source, &mut sink)?;

    match format {
        OutputFormat::Text => print!("{}", format_text(&result)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonMatchResult::from_match_result(&result))
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Parse `Name:Color` pairs, falling back to the default roster.
fn parse_players(args: &[String]) -> Result<Vec<PlayerSpec>, CliError> {
    if args.is_empty() {
        return Ok(DEFAULT_PLAYERS
            .iter()
            .map(|&(name, color)| PlayerSpec::new(name, color))
            .collect());
    }

    args.iter()
        .map(|arg| match arg.split_once(':') {
            Some((name, color)) if !name.is_empty() && !color.is_empty() => {
                Ok(PlayerSpec::new(name, color))
            }
            _ => Err(CliError::new(format!(
                "invalid player spec '{arg}', expected Name:Color"
            ))),
        })
        .collect()
}

/// Interactive action source reading line-based input from stdin.
///
/// Menu parsing is handled here with reprompts; everything that names an
/// area or a card goes to the engine as-is and is validated there, so a bad
/// id becomes a rejected action rather than a reprompt.
#[derive(Debug)]
struct ConsoleSource {
    quiet: bool,
}

impl ConsoleSource {
    /// Read one trimmed line, or `None` at end of input.
    fn read_line() -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn prompt(text: &str) -> Option<String> {
        print!("{text}");
        let _ = io::stdout().flush();
        Self::read_line()
    }

    fn prompt_number(text: &str) -> Option<u64> {
        loop {
            let line = Self::prompt(text)?;
            match line.parse() {
                Ok(n) => return Some(n),
                Err(_) => println!("Invalid number."),
            }
        }
    }
}

impl ActionSource for ConsoleSource {
    fn next_action(&mut self, state: &GameState) -> Result<Action, SessionError> {
        if !self.quiet {
            println!("{}", render_board(state));
            print!("{}", render_standings(state));
            println!();
        }

        let Some(player) = state.get_player(state.current_seat()) else {
            return Err(SessionError::OutOfActions);
        };
        println!(
            "{}'s turn  (${}, {} points)",
            player.name,
            player.balance,
            player.total_points()
        );

        loop {
            println!("  1. Buy area");
            println!("  2. Upgrade business");
            println!("  3. Draw opportunity card");
            println!("  4. End turn");
            let Some(choice) = Self::prompt("Choose an action (1-4): ") else {
                return Err(SessionError::OutOfActions);
            };

            match choice.as_str() {
                "1" => {
                    for area in state.map.unowned() {
                        println!("  Area #{}: ${}", area.id(), area.cost());
                    }
                    let Some(id) = Self::prompt_number("Area to buy: ") else {
                        return Err(SessionError::OutOfActions);
                    };
                    return Ok(Action::BuyArea {
                        area: clamp_area_id(id),
                    });
                }
                "2" => {
                    for area in state.map.owned_by(player.seat) {
                        println!(
                            "  Area #{}: level {}, upgrade ${}",
                            area.id(),
                            area.level(),
                            area.upgrade_cost()
                        );
                    }
                    let Some(id) = Self::prompt_number("Area to upgrade: ") else {
                        return Err(SessionError::OutOfActions);
                    };
                    return Ok(Action::UpgradeBusiness {
                        area: clamp_area_id(id),
                    });
                }
                "3" => {
                    let Some(pick) = Self::prompt_number("Pick a card (1-3): ") else {
                        return Err(SessionError::OutOfActions);
                    };
                    return Ok(Action::DrawOpportunity {
                        choice: u8::try_from(pick).unwrap_or(u8::MAX),
                    });
                }
                "4" => return Ok(Action::EndTurn),
                _ => println!("Invalid choice."),
            }
        }
    }
}

/// Ids past the u16 range can never name a real area, so any sentinel works.
fn clamp_area_id(id: u64) -> AreaId {
    u16::try_from(id).unwrap_or(AreaId::MAX)
}

/// Event sink printing one line per outcome.
#[derive(Debug)]
struct ConsoleSink {
    quiet: bool,
}

impl EventSink for ConsoleSink {
    fn on_turn(&mut self, _state: &GameState, report: &TurnReport) {
        match &report.outcome {
            Outcome::Purchased { area, cost } => {
                println!("{} bought area #{area} for ${cost}.", report.actor);
            }
            Outcome::Upgraded { area, cost, level } => {
                println!(
                    "{} upgraded area #{area} to level {level} for ${cost}.",
                    report.actor
                );
            }
            Outcome::Drew {
                hand,
                choice,
                points,
            } => {
                println!("{} drew:", report.actor);
                for (i, card) in hand.iter().enumerate() {
                    let marker = if i + 1 == usize::from(*choice) { '>' } else { ' ' };
                    println!("  {marker} {}. {}", i + 1, card.text);
                }
                println!("{} kept card {choice} (+{points} Bonus).", report.actor);
            }
            Outcome::Passed => println!("{} ended their turn.", report.actor),
            Outcome::Rejected(reason) => {
                println!("{} could not {}: {reason}.", report.actor, report.action);
            }
        }
        println!();
    }

    fn on_finish(&mut self, state: &GameState, result: &MatchResult) {
        if !self.quiet {
            println!("{}", render_board(state));
            print!("{}", render_standings(state));
            println!();
        }
        println!(
            "{} wins with {} points after {} turns!",
            result.winner_name, result.winning_total, result.turns_played
        );
        println!();
    }
}
