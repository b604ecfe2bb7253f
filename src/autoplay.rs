//! The playing loop
//!
//! Each round waits for the screen to show a ready deck, reads the cards,
//! finds a set and clicks its three cards. Screen capture and clicking are
//! left to implementations of `ScreenSource` and `Clicker` (window lookup,
//! device mirroring, OS mouse events); the loop only owns the polling budget
//! and the delays from `TimingConfig`.

use std::thread::sleep;
use std::time::Duration;

use image::RgbImage;

use crate::config::{BotConfig, TimingConfig};
use crate::deck::DeckAssembler;
use crate::errors::AutoplayError;
use crate::game_plan::ClickPlan;
use crate::solver::{find_first, SolveMethod};
use crate::utils::{debug_print, test_print};

/// Where the screenshots come from
pub trait ScreenSource {
    fn capture(&mut self) -> Result<RgbImage, AutoplayError>;
}

/// Who clicks; coordinates are relative to the screenshot
pub trait Clicker {
    fn click(&mut self, x: u32, y: u32) -> Result<(), AutoplayError>;
}

/// What one round did
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Round {
    /// The three cards of a set were clicked
    SetTaken(ClickPlan),
    /// A ready deck without any set: the game deals 3 more cards, the next
    /// round reads them
    NoSet,
    /// No ready deck within the polling budget
    DeckNotReady,
}

/// Why a game stopped
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEnd {
    /// No ready deck within the polling budget: all the cards have been found
    DeckNotReady,
    /// `max_rounds` rounds played
    RoundLimit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameSummary {
    pub sets_taken: usize,
    /// Rounds which found a ready deck without any set
    pub rounds_without_set: usize,
    pub end: GameEnd,
}

pub struct Autoplay {
    assembler: DeckAssembler,
    timing: TimingConfig,
    method: SolveMethod,
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        sleep(delay);
    }
}

impl Autoplay {
    pub fn new(assembler: DeckAssembler, timing: TimingConfig, method: SolveMethod) -> Self {
        Self { assembler, timing, method }
    }

    pub fn from_config(config: &BotConfig) -> Self {
        Self::new(DeckAssembler::from_config(config), config.timing.clone(), SolveMethod::Completion)
    }

    /// Poll the screen until it shows a ready deck; None once the polling
    /// budget is spent.
    pub fn wait_for_deck<S: ScreenSource + ?Sized>(
        &self,
        screen: &mut S,
    ) -> Result<Option<Vec<RgbImage>>, AutoplayError> {
        for poll in 0..self.timing.max_polls {
            let screenshot = screen.capture()?;
            let regions = self.assembler.crop_slots(&screenshot)?;
            let nb_cards = self.assembler.deck_readiness(&regions);
            if nb_cards > 0 {
                debug_print(&format!("wait_for_deck: {} cards after {} polls", nb_cards, poll + 1));
                return Ok(Some(regions));
            }
            pause(self.timing.poll_delay());
        }
        Ok(None)
    }

    /// Play one round: read the deck, click a set.
    pub fn play_round<S, C>(&self, screen: &mut S, clicker: &mut C) -> Result<Round, AutoplayError>
    where
        S: ScreenSource + ?Sized,
        C: Clicker + ?Sized,
    {
        pause(self.timing.new_card_delay());
        let Some(regions) = self.wait_for_deck(screen)? else {
            return Ok(Round::DeckNotReady);
        };
        let cards = self.assembler.assemble(&regions)?;
        // every slot was cropped, so each of them has a click point
        let Some(plan) = find_first(&cards, self.method)
            .and_then(|set| ClickPlan::for_set(&cards, &set, self.assembler.layout()))
        else {
            debug_print(&format!("play_round: no set among {} cards", cards.len()));
            return Ok(Round::NoSet);
        };
        for &(x, y) in &plan.points {
            pause(self.timing.click_delay());
            clicker.click(x, y)?;
        }
        Ok(Round::SetTaken(plan))
    }

    /// Play rounds until the cards run out, at most `max_rounds` of them
    pub fn play_game<S, C>(&self, screen: &mut S, clicker: &mut C) -> Result<GameSummary, AutoplayError>
    where
        S: ScreenSource + ?Sized,
        C: Clicker + ?Sized,
    {
        let mut sets_taken = 0;
        let mut rounds_without_set = 0;
        for _ in 0..self.timing.max_rounds {
            match self.play_round(screen, clicker)? {
                Round::SetTaken(plan) => {
                    sets_taken += 1;
                    debug_print(&format!("play_game: set #{} in slots {:?}", sets_taken, plan.slots));
                }
                Round::NoSet => rounds_without_set += 1,
                Round::DeckNotReady => {
                    test_print(&format!("Game over after {} sets", sets_taken));
                    return Ok(GameSummary { sets_taken, rounds_without_set, end: GameEnd::DeckNotReady });
                }
            }
        }
        test_print(&format!("Stopped after {} rounds, {} sets", self.timing.max_rounds, sets_taken));
        Ok(GameSummary { sets_taken, rounds_without_set, end: GameEnd::RoundLimit })
    }
}
