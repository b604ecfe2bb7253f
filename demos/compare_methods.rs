//! Timing comparison between the brute force and the completion methods
//!
//! For each number of visible cards, deals random cards holding at least one
//! set and measures the average time to find the first set.
//!
//! Usage:
//!   cargo run --release --example compare_methods

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use separator::Separatable;

use set_bot::solver::{brute_force_first, completion_first, random_cards_with_a_set};
use set_bot::Card;

const ATTEMPTS: usize = 10_000;

/// Average time in nanoseconds of `method` over `ATTEMPTS` random deals, None
/// when no deal of `nb_cards` cards can hold a set
fn average_nanos(method: fn(&[Card]) -> Option<set_bot::SetTriple>, nb_cards: usize, rng: &mut StdRng) -> Option<f64> {
    let mut total = 0u128;
    for _ in 0..ATTEMPTS {
        let cards = random_cards_with_a_set(nb_cards, rng)?;
        // After you have the cards then time the method
        let start = Instant::now();
        let found = method(&cards);
        total += start.elapsed().as_nanos();
        assert!(found.is_some());
    }
    Some(total as f64 / ATTEMPTS as f64)
}

fn main() {
    println!("{}", "=".repeat(80));
    println!("Average time to find a set: brute force vs completion");
    println!("{}", "=".repeat(80));
    println!("  {} deals per size", (ATTEMPTS as u64).separated_string());
    println!();
    println!("  {:>5}  {:>14}  {:>14}  {:>8}", "cards", "brute (ns)", "completion (ns)", "speedup");
    println!("{}", "-".repeat(80));

    let mut rng = StdRng::seed_from_u64(42);
    // 21 cards can be shown but are very unlikely
    for nb_cards in 3..=18 {
        let (Some(brute), Some(completion)) = (
            average_nanos(brute_force_first, nb_cards, &mut rng),
            average_nanos(completion_first, nb_cards, &mut rng),
        ) else {
            continue;
        };
        println!(
            "  {:>5}  {:>14}  {:>14}  {:>7.2}x",
            nb_cards,
            (brute as u64).separated_string(),
            (completion as u64).separated_string(),
            brute / completion.max(1.0)
        );
    }
}
