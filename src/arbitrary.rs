use std::collections::BTreeSet;

use crate::attributes::*;
use crate::card::{Card, MAX_VISIBLE_CARDS};

impl quickcheck::Arbitrary for Count {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&Count::ALL).unwrap()
    }
}

impl quickcheck::Arbitrary for Colour {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&Colour::ALL).unwrap()
    }
}

impl quickcheck::Arbitrary for Fill {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&Fill::ALL).unwrap()
    }
}

impl quickcheck::Arbitrary for Shape {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&Shape::ALL).unwrap()
    }
}

impl quickcheck::Arbitrary for Card {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self {
            count: Count::arbitrary(g),
            colour: Colour::arbitrary(g),
            fill: Fill::arbitrary(g),
            shape: Shape::arbitrary(g),
        }
    }
}

/// A duplicate-free collection of 0..=21 cards, as the game would show.
#[derive(Clone, Debug)]
pub struct VisibleCards(pub Vec<Card>);

impl quickcheck::Arbitrary for VisibleCards {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let target = usize::arbitrary(g) % (MAX_VISIBLE_CARDS + 1);
        let mut seen = BTreeSet::new();
        let mut cards = Vec::with_capacity(target);
        while cards.len() < target {
            let card = Card::arbitrary(g);
            // Keep the draw order, it stands for the slot order on screen
            if seen.insert(card) {
                cards.push(card);
            }
        }
        VisibleCards(cards)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let cards = self.0.clone();
        Box::new((0..cards.len()).map(move |skip| {
            let mut smaller = cards.clone();
            smaller.remove(skip);
            VisibleCards(smaller)
        }))
    }
}
