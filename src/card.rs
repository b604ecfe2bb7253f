//! Set cards as fixed-shape records
//!
//! A card is identified either by its four attributes or by its index in
//! 0..81, whose base-3 digits are the axis indexes (count, colour, fill, shape)
//! from the most to the least significant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::attributes::*;

/// Number of distinct cards in a full deck
pub const DECK_SIZE: usize = 81;

/// Maximum number of cards the game shows at once
pub const MAX_VISIBLE_CARDS: usize = 21;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub count: Count,
    pub colour: Colour,
    pub fill: Fill,
    pub shape: Shape,
}

impl Card {
    pub fn new(count: Count, colour: Colour, fill: Fill, shape: Shape) -> Self {
        Self { count, colour, fill, shape }
    }

    /// Index of the value this card holds on the given axis
    pub fn axis_index(&self, axis: Axis) -> usize {
        match axis {
            Axis::Count => self.count.index(),
            Axis::Colour => self.colour.index(),
            Axis::Fill => self.fill.index(),
            Axis::Shape => self.shape.index(),
        }
    }

    /// Card index in 0..81
    pub fn index(&self) -> usize {
        Axis::ALL
            .iter()
            .map(|&axis| self.axis_index(axis) * axis.weight())
            .sum()
    }

    /// Inverse of `index()`; indexes above 80 wrap around the deck.
    pub fn from_index(i: usize) -> Self {
        Self::from_axis_indexes(index_to_base3(i % DECK_SIZE))
    }

    /// Build a card from its per-axis indexes, in `Axis::ALL` order
    pub fn from_axis_indexes(digits: [usize; 4]) -> Self {
        Self {
            count: Count::from_index(digits[0]),
            colour: Colour::from_index(digits[1]),
            fill: Fill::from_index(digits[2]),
            shape: Shape::from_index(digits[3]),
        }
    }
}

/// Converts a card index (0..80) to its base-3 representation, one digit per
/// attribute.
pub fn index_to_base3(i: usize) -> [usize; 4] {
    let mut rem = i;
    let mut base3 = [0; 4];
    for j in (0..4).rev() {
        base3[j] = rem % 3;
        rem /= 3;
    }
    base3
}

/// All 81 cards, in index order
pub fn full_deck() -> Vec<Card> {
    (0..DECK_SIZE).map(Card::from_index).collect()
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}-{}", self.count, self.colour, self.fill, self.shape)
    }
}

/// The error type for the [`FromStr`] instance of [`Card`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CardFromStrErr {
    #[error("expected 4 fields (count-colour-fill-shape), found {0}")]
    WrongNumberOfFields(usize),
    #[error(transparent)]
    InvalidAttribute(#[from] UnknownAttribute),
}

impl FromStr for Card {
    type Err = CardFromStrErr;

    /// Parses `2-purple-solid-diamond` (separators: '-', '/' or spaces)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s
            .split(|c: char| c == '-' || c == '/' || c.is_whitespace())
            .filter(|field| !field.is_empty())
            .collect();
        if fields.len() != 4 {
            return Err(CardFromStrErr::WrongNumberOfFields(fields.len()));
        }
        Ok(Card {
            count: fields[0].parse()?,
            colour: fields[1].parse()?,
            fill: fields[2].parse()?,
            shape: fields[3].parse()?,
        })
    }
}

/// Parse a comma or semicolon separated list of cards
pub fn parse_card_list(s: &str) -> Result<Vec<Card>, CardFromStrErr> {
    s.split([',', ';'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| item.parse::<Card>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn index_round_trip_covers_deck() {
        let deck = full_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        let distinct: HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(distinct.len(), DECK_SIZE);
        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.index(), i);
        }
    }

    #[test]
    fn base3_digits() {
        assert_eq!(index_to_base3(0), [0, 0, 0, 0]);
        assert_eq!(index_to_base3(80), [2, 2, 2, 2]);
        assert_eq!(index_to_base3(27 + 9 * 2 + 1), [1, 2, 0, 1]);
    }

    #[test]
    fn display_and_parse() {
        let card = Card::new(Count::Two, Colour::Purple, Fill::Solid, Shape::Diamond);
        assert_eq!(card.to_string(), "2-purple-solid-diamond");
        assert_eq!("2-purple-solid-diamond".parse::<Card>(), Ok(card));
        assert_eq!("2 Purple solid DIAMOND".parse::<Card>(), Ok(card));
        assert_eq!(
            "2-purple-solid".parse::<Card>(),
            Err(CardFromStrErr::WrongNumberOfFields(3))
        );
        assert!(matches!(
            "2-pink-solid-diamond".parse::<Card>(),
            Err(CardFromStrErr::InvalidAttribute(_))
        ));
    }

    #[test]
    fn card_list() {
        let cards = parse_card_list("1-red-open-oval, 3-green-striped-squiggle;").unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].count, Count::Three);
        assert!(parse_card_list("1-red-open").is_err());
    }

    #[test]
    fn parse_error_messages() {
        let err = "2-pink-solid-diamond".parse::<Card>().unwrap_err();
        assert_eq!(err.to_string(), "'pink' is not a valid colour value");
        let source = UnknownAttribute { axis: Axis::Shape, text: "star".to_string() };
        assert_eq!(CardFromStrErr::from(source.clone()), CardFromStrErr::InvalidAttribute(source));
        assert_eq!(
            CardFromStrErr::WrongNumberOfFields(5).to_string(),
            "expected 4 fields (count-colour-fill-shape), found 5"
        );
    }
}
