//! Bot configuration
//!
//! Everything that depends on the rendering of the game (reference colours,
//! expected symbol areas, thresholds, slot geometry) and on the speed of the
//! device (delays, polling budget) lives here rather than in globals, so that
//! several configurations (e.g. two screen resolutions) can coexist.
//!
//! The defaults match a phone screen mirrored at about 500x900 pixels.
//! Configurations are stored as pretty JSON.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::attributes::{Colour, Fill, Shape};
use crate::card::MAX_VISIBLE_CARDS;
use crate::nearest::NearestTable;

/// Per-shape symbol areas (in pixels) measured on the reference screen
const REFERENCE_SHAPE_AREAS: [(f64, Shape); 3] = [
    (2500.0, Shape::Diamond),
    (3300.0, Shape::Squiggle),
    (4300.0, Shape::Oval),
];

/// Scale between the reference screen and the default phone screen
pub const DEFAULT_AREA_SCALE: f64 = 0.56;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Reference symbol colours
    pub palette: NearestTable<[u8; 3], Colour>,
    /// Expected area of one symbol for each shape
    pub shape_areas: NearestTable<f64, Shape>,
    /// Expected fraction of a symbol's silhouette left unpainted, per fill
    pub hollow_fractions: NearestTable<f64, Fill>,
    /// Grey levels at or below this value are symbol pixels
    pub symbol_threshold: u8,
}

impl ClassifierConfig {
    /// Default tables, with the reference shape areas multiplied by `scale`
    pub fn with_area_scale(scale: f64) -> Self {
        Self {
            palette: NearestTable::new(vec![
                ([98, 37, 142], Colour::Purple),
                ([231, 3, 7], Colour::Red),
                ([3, 96, 56], Colour::Green),
            ]),
            shape_areas: NearestTable::new(
                REFERENCE_SHAPE_AREAS
                    .iter()
                    .map(|&(area, shape)| (area * scale, shape))
                    .collect(),
            ),
            hollow_fractions: NearestTable::new(vec![
                (0.0, Fill::Solid),
                (0.5, Fill::Open),
                (0.1, Fill::Striped),
            ]),
            symbol_threshold: 240,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::with_area_scale(DEFAULT_AREA_SCALE)
    }
}

/// A pixel rectangle, right and bottom excluded
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl SlotRect {
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// None when the shifted rectangle leaves the u32 range
    pub fn shifted(&self, dx: u32, dy: u32) -> Option<Self> {
        Some(Self {
            left: self.left.checked_add(dx)?,
            top: self.top.checked_add(dy)?,
            right: self.right.checked_add(dx)?,
            bottom: self.bottom.checked_add(dy)?,
        })
    }

    pub fn centre(&self) -> (u32, u32) {
        (self.left + self.width() / 2, self.top + self.height() / 2)
    }
}

/// Card slots laid out row-major on a grid; the other slots are the first one
/// shifted by whole steps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotLayout {
    pub first_slot: SlotRect,
    pub step_x: u32,
    pub step_y: u32,
    pub columns: usize,
    pub max_slots: usize,
    /// Channels above this value count as card background
    pub white_threshold: u8,
}

impl SlotLayout {
    /// Rectangle of slot `slot`, relative to the screenshot; None when the
    /// layout puts it beyond the u32 range
    pub fn slot_rect(&self, slot: usize) -> Option<SlotRect> {
        let columns = self.columns.max(1);
        let col = u32::try_from(slot % columns).ok()?;
        let row = u32::try_from(slot / columns).ok()?;
        self.first_slot
            .shifted(col.checked_mul(self.step_x)?, row.checked_mul(self.step_y)?)
    }

    /// Point to click to select the card in slot `slot`
    pub fn slot_centre(&self, slot: usize) -> Option<(u32, u32)> {
        self.slot_rect(slot).map(|rect| rect.centre())
    }
}

impl Default for SlotLayout {
    fn default() -> Self {
        Self {
            first_slot: SlotRect { left: 4, top: 123, right: 170, bottom: 211 },
            step_x: 177,
            step_y: 98,
            columns: 3,
            max_slots: MAX_VISIBLE_CARDS,
            white_threshold: 240,
        }
    }
}

/// Delays and retry budgets of the playing loop, in milliseconds and counts.
/// Raise the delays on slower devices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Before each click; too short and only part of a set gets selected
    pub click_delay_ms: u64,
    /// Before the first screenshot of a round; too short and the bot reads the
    /// previous deck and clicks the wrong cards
    pub new_card_delay_ms: u64,
    /// Between two screenshots while waiting for a ready deck
    pub poll_delay_ms: u64,
    /// Screenshots taken while waiting for a ready deck
    pub max_polls: usize,
    /// Upper bound of rounds in one game (81 cards / 3)
    pub max_rounds: usize,
}

impl TimingConfig {
    pub fn click_delay(&self) -> Duration {
        Duration::from_millis(self.click_delay_ms)
    }

    pub fn new_card_delay(&self) -> Duration {
        Duration::from_millis(self.new_card_delay_ms)
    }

    pub fn poll_delay(&self) -> Duration {
        Duration::from_millis(self.poll_delay_ms)
    }

    /// No waiting at all, for tests and offline replays
    pub fn immediate() -> Self {
        Self {
            click_delay_ms: 0,
            new_card_delay_ms: 0,
            poll_delay_ms: 0,
            ..Self::default()
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            click_delay_ms: 20,
            new_card_delay_ms: 30,
            poll_delay_ms: 10,
            max_polls: 30,
            max_rounds: 27,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BotConfig {
    pub classifier: ClassifierConfig,
    pub layout: SlotLayout,
    pub timing: TimingConfig,
}

impl BotConfig {
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let file = fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self).map_err(std::io::Error::other)
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let file = fs::File::open(path)?;
        serde_json::from_reader(std::io::BufReader::new(file)).map_err(std::io::Error::other)
    }

    /// Load `path` if given, the defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> std::io::Result<Self> {
        match path {
            Some(path) => Self::load_json(path),
            None => Ok(Self::default()),
        }
    }
}
