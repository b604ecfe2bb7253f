//! From a found set back to the slots to click
//!
//! The solver works on card values; the slots are recovered by looking each
//! card of the set up in the visible cards, which hold no duplicates.

use crate::card::Card;
use crate::config::SlotLayout;
use crate::solver::SetTriple;

/// Slot of `card` among the visible cards
pub fn slot_of(cards: &[Card], card: &Card) -> Option<usize> {
    cards.iter().position(|c| c == card)
}

/// The three clicks selecting a set, coordinates relative to the screenshot
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickPlan {
    pub slots: [usize; 3],
    pub points: [(u32, u32); 3],
}

impl ClickPlan {
    /// None when a card of the set is not among the visible cards, or its
    /// slot lies outside the layout's coordinate range
    pub fn for_set(cards: &[Card], set: &SetTriple, layout: &SlotLayout) -> Option<Self> {
        let mut slots = [0; 3];
        for (slot, card) in slots.iter_mut().zip(set.cards().iter()) {
            *slot = slot_of(cards, card)?;
        }
        // click in screen order
        slots.sort_unstable();
        let mut points = [(0, 0); 3];
        for (point, &slot) in points.iter_mut().zip(slots.iter()) {
            *point = layout.slot_centre(slot)?;
        }
        Some(Self { slots, points })
    }
}
