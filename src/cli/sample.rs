//! Sample command implementation.

// Frequency reporting converts counts to f64 for display only
#![allow(clippy::cast_precision_loss)]

use venture::game::{DECK_SIZE, Deck, HAND_SIZE};
use venture::rng::Rng;

use super::CliError;

/// Execute the sample command: draw hands repeatedly and report how often
/// each card shows up. Useful for eyeballing sampling uniformity.
///
/// # Errors
///
/// Returns an error if `draws` is zero.
pub(crate) fn execute(draws: u64, seed: u64) -> Result<(), CliError> {
    if draws == 0 {
        return Err(CliError::new("need at least one draw"));
    }

    let deck = Deck::generate();
    let mut rng = Rng::new(seed);
    let mut counts = [0u64; DECK_SIZE];

    for _ in 0..draws {
        for card in deck.draw(&mut rng) {
            counts[usize::from(card.task) - 1] += 1;
        }
    }

    println!("Drew {draws} hands of {HAND_SIZE} from {DECK_SIZE} cards (seed {seed})");
    println!();

    for (i, &count) in counts.iter().enumerate() {
        let share = count as f64 / draws as f64 * 100.0;
        println!("  Card {:2}: {count:8}  ({share:5.2}% of hands)", i + 1);
    }

    let expected = 100.0 * HAND_SIZE as f64 / DECK_SIZE as f64;
    let min = counts.iter().min().copied().unwrap_or(0);
    let max = counts.iter().max().copied().unwrap_or(0);
    println!();
    println!("Expected share per card: {expected:.2}%  (min count {min}, max count {max})");

    Ok(())
}
