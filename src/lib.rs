//! Plays the card game Set from screenshots: reads the cards shown in the
//! slots of the screen, finds a set among them, and plans the three clicks
//! selecting it.

pub mod attributes;
pub mod autoplay;
pub mod card;
pub mod classifier;
pub mod config;
pub mod deck;
pub mod errors;
pub mod game_plan;
pub mod is_set;
pub mod nearest;
pub mod solver;
pub mod utils;

#[cfg(test)]
mod arbitrary;
#[cfg(test)]
mod synthetic;

pub use attributes::{Attribute, Axis, Colour, Count, Fill, Shape};
pub use card::{full_deck, Card};
pub use classifier::CardClassifier;
pub use config::BotConfig;
pub use deck::DeckAssembler;
pub use errors::{AutoplayError, ClassifyError, DeckError};
pub use game_plan::ClickPlan;
pub use is_set::{is_set, next_to_set};
pub use solver::{find_all, find_first, SetTriple, SolveMethod};
