//! Turning the slots of a screenshot into the list of visible cards
//!
//! Cards fill the slots contiguously from slot 0: the first slot without a
//! card marks the end of the visible cards. A slot holds a card when its
//! top-left and bottom-right pixels are both near white (the card corners),
//! which the table background and a highlighted card never are.

use std::collections::HashMap;

use image::{imageops, Rgb, RgbImage};

use crate::card::Card;
use crate::classifier::CardClassifier;
use crate::config::{BotConfig, SlotLayout};
use crate::errors::DeckError;
use crate::utils::debug_print;

/// Checks if a pixel is white-ish
pub fn is_white(pixel: &Rgb<u8>, threshold: u8) -> bool {
    pixel.0.iter().all(|&channel| channel > threshold)
}

/// Reads the slots of a screenshot into cards
#[derive(Clone, Debug, Default)]
pub struct DeckAssembler {
    classifier: CardClassifier,
    layout: SlotLayout,
}

impl DeckAssembler {
    pub fn new(classifier: CardClassifier, layout: SlotLayout) -> Self {
        Self { classifier, layout }
    }

    pub fn from_config(config: &BotConfig) -> Self {
        Self::new(CardClassifier::new(config.classifier.clone()), config.layout.clone())
    }

    pub fn layout(&self) -> &SlotLayout {
        &self.layout
    }

    pub fn classifier(&self) -> &CardClassifier {
        &self.classifier
    }

    /// Check if the region shows a card by looking at its top-left and
    /// bottom-right pixels
    pub fn is_card_region(&self, region: &RgbImage) -> bool {
        let (width, height) = region.dimensions();
        if width == 0 || height == 0 {
            return false;
        }
        let threshold = self.layout.white_threshold;
        is_white(region.get_pixel(0, 0), threshold)
            && is_white(region.get_pixel(width - 1, height - 1), threshold)
    }

    /// Number of cards on a stable, fully dealt deck, 0 when the deck is not
    /// ready: the count of occupied slots must be a positive multiple of 3,
    /// and the occupied slots must come before all the empty ones (a gap means
    /// the screen is being redrawn, e.g. after a set has been taken).
    pub fn deck_readiness(&self, regions: &[RgbImage]) -> usize {
        let occupied: Vec<bool> = regions.iter().map(|r| self.is_card_region(r)).collect();
        let nb_cards = occupied.iter().filter(|&&o| o).count();
        let contiguous = occupied[..nb_cards].iter().all(|&o| o);
        if nb_cards > 0 && nb_cards % 3 == 0 && contiguous {
            nb_cards
        } else {
            0
        }
    }

    pub fn is_deck_ready(&self, regions: &[RgbImage]) -> bool {
        self.deck_readiness(regions) > 0
    }

    /// Classify the slots from slot 0 up to the first slot without a card.
    ///
    /// A card read twice is reported rather than dropped: the deck holds no
    /// duplicates, so it means the classifier tables do not fit the screen.
    pub fn assemble(&self, regions: &[RgbImage]) -> Result<Vec<Card>, DeckError> {
        let mut cards = Vec::new();
        let mut first_seen: HashMap<Card, usize> = HashMap::new();
        for (slot, region) in regions.iter().enumerate() {
            if !self.is_card_region(region) {
                // All cards found
                break;
            }
            let card = self
                .classifier
                .classify(region)
                .map_err(|source| DeckError::Classify { slot, source })?;
            if let Some(&first_slot) = first_seen.get(&card) {
                debug_print(&format!(
                    "assemble: {} in slots {} and {}",
                    card, first_slot, slot
                ));
                return Err(DeckError::DuplicateCard { card, first_slot, second_slot: slot });
            }
            first_seen.insert(card, slot);
            cards.push(card);
        }
        debug_print(&format!("assemble: {} cards read", cards.len()));
        Ok(cards)
    }

    /// Cut the slot regions out of a whole screenshot, in slot order
    pub fn crop_slots(&self, screenshot: &RgbImage) -> Result<Vec<RgbImage>, DeckError> {
        let (width, height) = screenshot.dimensions();
        (0..self.layout.max_slots)
            .map(|slot| {
                let rect = self
                    .layout
                    .slot_rect(slot)
                    .filter(|rect| rect.right <= width && rect.bottom <= height)
                    .ok_or(DeckError::SlotOutOfBounds { slot, width, height })?;
                Ok(imageops::crop_imm(screenshot, rect.left, rect.top, rect.width(), rect.height()).to_image())
            })
            .collect()
    }
}
