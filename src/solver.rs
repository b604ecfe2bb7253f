//! Finding sets among the visible cards
//!
//! Two families of algorithms are provided and must always agree:
//!     - brute force: test every 3-combination of the visible cards with
//!       `is_set`, O(n^3)
//!     - completion: for every pair of visible cards, compute the card that
//!       would complete the set (`next_to_set`) and look it up among the
//!       visible cards, O(n^2) pairs with an O(1) lookup
//!
//! The brute force family is the reference used to test the completion
//! family. Both take a duplicate-free snapshot of the visible cards and keep
//! no state between calls. Finding no set is a normal outcome: the caller
//! gets `None` or an empty list.

use std::collections::HashSet;
use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::card::{full_deck, Card, DECK_SIZE};
use crate::is_set::{is_set, next_to_set};

/// An unordered triple of distinct cards forming a set.
///
/// The cards are kept sorted by card index, so two triples found from
/// different pairs compare and hash equal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SetTriple {
    cards: [Card; 3],
}

impl SetTriple {
    pub fn new(a: Card, b: Card, c: Card) -> Self {
        let mut cards = [a, b, c];
        cards.sort();
        Self { cards }
    }

    pub fn cards(&self) -> &[Card; 3] {
        &self.cards
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}

impl fmt::Display for SetTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}, {}}}", self.cards[0], self.cards[1], self.cards[2])
    }
}

/// Which algorithm family to run
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolveMethod {
    BruteForce,
    #[default]
    Completion,
}

/// Find the first set, with the chosen method
pub fn find_first(cards: &[Card], method: SolveMethod) -> Option<SetTriple> {
    match method {
        SolveMethod::BruteForce => brute_force_first(cards),
        SolveMethod::Completion => completion_first(cards),
    }
}

/// Find all the sets, with the chosen method
pub fn find_all(cards: &[Card], method: SolveMethod) -> Vec<SetTriple> {
    match method {
        SolveMethod::BruteForce => brute_force_all(cards),
        SolveMethod::Completion => completion_all(cards),
    }
}

/// Iterate over all the sets found by testing every 3-combination, in
/// combinatorial index order (i < j < k).
fn brute_force_iter(cards: &[Card]) -> impl Iterator<Item = SetTriple> + '_ {
    let n = cards.len();
    (0..n).flat_map(move |i| {
        ((i + 1)..n).flat_map(move |j| {
            ((j + 1)..n).filter_map(move |k| {
                let (a, b, c) = (&cards[i], &cards[j], &cards[k]);
                // a repeated card is never part of a set
                if a == b || a == c || b == c {
                    return None;
                }
                is_set(a, b, c).then(|| SetTriple::new(*a, *b, *c))
            })
        })
    })
}

/// Finds the first valid set using brute force
pub fn brute_force_first(cards: &[Card]) -> Option<SetTriple> {
    brute_force_iter(cards).next()
}

/// Finds all valid sets using brute force
pub fn brute_force_all(cards: &[Card]) -> Vec<SetTriple> {
    brute_force_iter(cards).collect()
}

/// Membership table over the 81 card indexes
#[derive(Copy, Clone)]
struct Presence([bool; DECK_SIZE]);

impl Presence {
    fn of(cards: &[Card]) -> Self {
        let mut present = [false; DECK_SIZE];
        for card in cards {
            present[card.index()] = true;
        }
        Presence(present)
    }

    #[inline]
    fn contains(&self, card: &Card) -> bool {
        self.0[card.index()]
    }
}

/// Iterate over the sets found from each pair (i < j) whose completion is
/// visible. A set is yielded once per pair it contains, so up to 3 times.
fn completion_iter(cards: &[Card]) -> impl Iterator<Item = SetTriple> + '_ {
    let present = Presence::of(cards);
    let n = cards.len();
    (0..n).flat_map(move |i| {
        ((i + 1)..n).filter_map(move |j| {
            let (a, b) = (&cards[i], &cards[j]);
            let missing = next_to_set(a, b);
            // only possible for a == b, which a visible collection never holds
            if missing == *a || missing == *b {
                return None;
            }
            present
                .contains(&missing)
                .then(|| SetTriple::new(*a, *b, missing))
        })
    })
}

/// Find the first set using the completion method
pub fn completion_first(cards: &[Card]) -> Option<SetTriple> {
    completion_iter(cards).next()
}

/// Find all the sets using the completion method, each set listed once in
/// the order it was first discovered.
pub fn completion_all(cards: &[Card]) -> Vec<SetTriple> {
    let mut seen = HashSet::new();
    completion_iter(cards)
        .filter(|triple| seen.insert(*triple))
        .collect()
}

/// The first `num` cards of a shuffled deck
pub fn random_cards<R: Rng + ?Sized>(num: usize, rng: &mut R) -> Vec<Card> {
    let mut deck = full_deck();
    deck.shuffle(rng);
    deck.truncate(num);
    deck
}

/// Random cards that hold at least one set; None for fewer than 3 or more
/// than 81 cards.
pub fn random_cards_with_a_set<R: Rng + ?Sized>(num: usize, rng: &mut R) -> Option<Vec<Card>> {
    if !(3..=DECK_SIZE).contains(&num) {
        return None;
    }
    loop {
        let cards = random_cards(num, rng);
        if completion_first(&cards).is_some() {
            return Some(cards);
        }
    }
}
