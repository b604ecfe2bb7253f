use crate::card::Card;

/// Why a slot region could not be turned into a card.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("the region has no pixels")]
    EmptyRegion,
    #[error("no symbol found in the region")]
    NoSymbol,
    #[error("{0} symbols found, a card holds 1 to 3")]
    SymbolCount(usize),
    #[error("the {0} reference table is empty")]
    EmptyTable(&'static str),
}

/// The error type for assembling the visible cards from slot regions.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("slot {slot} could not be classified")]
    Classify {
        slot: usize,
        #[source]
        source: ClassifyError,
    },
    /// The same card read in two slots: the classifier tables do not match
    /// the rendering.
    #[error("card {card} read in both slot {first_slot} and slot {second_slot}, check the classifier calibration")]
    DuplicateCard {
        card: Card,
        first_slot: usize,
        second_slot: usize,
    },
    #[error("slot {slot} lies outside the {width}x{height} screenshot")]
    SlotOutOfBounds { slot: usize, width: u32, height: u32 },
}

/// The error type for the playing loop and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum AutoplayError {
    #[error("screen capture failed: {0}")]
    Capture(String),
    #[error("click at ({x}, {y}) failed: {reason}")]
    Click { x: u32, y: u32, reason: String },
    #[error(transparent)]
    Deck(#[from] DeckError),
}
