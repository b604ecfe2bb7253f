//! Checking and completing sets
//!
//! Three cards form a set when, on each of the 4 axes, their values are all
//! the same or all different. Every check here is derived from the axis
//! completion `third_index`: (a, b, c) is a set iff c is the completion of
//! (a, b) on every axis.

use std::collections::HashSet;

use crate::attributes::{third_index, Axis};
use crate::card::Card;

/// Returns the card which forms a valid set with `a` and `b`.
/// The result does not depend on the order of `a` and `b`.
pub fn next_to_set(a: &Card, b: &Card) -> Card {
    let mut digits = [0; 4];
    for (d, &axis) in digits.iter_mut().zip(Axis::ALL.iter()) {
        *d = third_index(a.axis_index(axis), b.axis_index(axis));
    }
    Card::from_axis_indexes(digits)
}

/// Checks whether three cards form a valid set.
pub fn is_set(a: &Card, b: &Card, c: &Card) -> bool {
    Axis::ALL
        .iter()
        .all(|&axis| third_index(a.axis_index(axis), b.axis_index(axis)) == c.axis_index(axis))
}

/// Same answer as `is_set`, by counting the distinct values on each axis: a
/// set never has exactly 2 distinct values on an axis.
pub fn is_set_by_distinct_values(a: &Card, b: &Card, c: &Card) -> bool {
    Axis::ALL.iter().all(|&axis| {
        let values: HashSet<usize> = [a, b, c].iter().map(|card| card.axis_index(axis)).collect();
        values.len() != 2
    })
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::attributes::*;
    use crate::card::full_deck;

    fn card(count: Count, colour: Colour) -> Card {
        Card::new(count, colour, Fill::Solid, Shape::Diamond)
    }

    #[test]
    fn count_varies_others_constant() {
        let a = card(Count::One, Colour::Purple);
        let b = card(Count::Two, Colour::Purple);
        let c = card(Count::Three, Colour::Purple);
        assert!(is_set(&a, &b, &c));
        assert!(is_set_by_distinct_values(&a, &b, &c));
        assert_eq!(next_to_set(&a, &b), c);
    }

    #[test]
    fn two_distinct_counts_rejected() {
        let a = card(Count::One, Colour::Purple);
        let b = card(Count::Two, Colour::Purple);
        let c = card(Count::Two, Colour::Red);
        assert!(!is_set(&a, &b, &c));
        assert!(!is_set_by_distinct_values(&a, &b, &c));
    }

    #[test]
    fn both_checks_agree_on_whole_deck() {
        let deck = full_deck();
        for a in &deck {
            for b in &deck {
                for c in &deck {
                    assert_eq!(
                        is_set(a, b, c),
                        is_set_by_distinct_values(a, b, c),
                        "{} {} {}",
                        a,
                        b,
                        c
                    );
                }
            }
        }
    }

    #[test]
    fn every_pair_has_exactly_one_completion_in_deck() {
        let deck = full_deck();
        for (i, a) in deck.iter().enumerate() {
            for b in &deck[i + 1..] {
                let matching: Vec<&Card> = deck.iter().filter(|c| is_set(a, b, c)).collect();
                assert_eq!(matching, vec![&next_to_set(a, b)]);
            }
        }
    }

    quickcheck! {
        fn completion_is_symmetric(a: Card, b: Card) -> bool {
            next_to_set(&a, &b) == next_to_set(&b, &a)
        }

        fn completion_is_distinct_from_pair(a: Card, b: Card) -> bool {
            let c = next_to_set(&a, &b);
            if a == b { c == a } else { c != a && c != b }
        }

        fn set_is_order_independent(a: Card, b: Card) -> bool {
            let c = next_to_set(&a, &b);
            is_set(&a, &b, &c) && is_set(&c, &a, &b) && is_set(&b, &c, &a)
        }
    }
}
