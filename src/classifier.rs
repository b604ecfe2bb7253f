//! Reading a card from the pixels of its slot
//!
//! The region must hold exactly one card: coloured symbols on a near-white
//! background. The steps are:
//!     - greyscale; the darkest pixel gives the symbol colour, matched to the
//!       nearest palette colour
//!     - threshold: grey levels at or below `symbol_threshold` are painted
//!       symbol pixels
//!     - flood-fill the unpainted area from the top-left corner: whatever is
//!       not reached is enclosed by a symbol, so painted + enclosed pixels
//!       make up the symbol silhouettes, filled or not
//!     - the middle row crosses every symbol once, entering and leaving it:
//!       the number of changes along that row, halved, is the symbol count
//!     - silhouette area per symbol gives the shape, the share of the
//!       silhouette left unpainted gives the fill (both nearest reference)

use std::collections::VecDeque;

use image::RgbImage;

use crate::attributes::Count;
use crate::card::Card;
use crate::config::ClassifierConfig;
use crate::errors::ClassifyError;
use crate::utils::debug_print;

/// Measurements behind a classification, for calibrating the tables
#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
    pub card: Card,
    pub symbol_count: usize,
    pub sampled_colour: [u8; 3],
    pub area_per_symbol: f64,
    pub hollow_fraction: f64,
}

#[derive(Clone, Debug, Default)]
pub struct CardClassifier {
    config: ClassifierConfig,
}

impl CardClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn classify(&self, region: &RgbImage) -> Result<Card, ClassifyError> {
        self.classify_detailed(region).map(|c| c.card)
    }

    pub fn classify_detailed(&self, region: &RgbImage) -> Result<Classification, ClassifyError> {
        let (width, height) = region.dimensions();
        if width == 0 || height == 0 {
            return Err(ClassifyError::EmptyRegion);
        }
        let (width, height) = (width as usize, height as usize);

        let grey = greyscale(region);

        // colour of the darkest pixel
        let darkest = darkest_index(&grey);
        let sampled_colour = region
            .get_pixel((darkest % width) as u32, (darkest / width) as u32)
            .0;
        let colour = self
            .config
            .palette
            .nearest(&sampled_colour)
            .ok_or(ClassifyError::EmptyTable("palette"))?;

        let painted: Vec<bool> = grey
            .iter()
            .map(|&g| g <= self.config.symbol_threshold)
            .collect();
        let silhouette = silhouette(&painted, width, height);

        let symbol_count = count_crossings(&silhouette[(height / 2) * width..(height / 2 + 1) * width]) / 2;
        if symbol_count == 0 {
            return Err(ClassifyError::NoSymbol);
        }
        let count = Count::from_value(symbol_count).ok_or(ClassifyError::SymbolCount(symbol_count))?;

        let silhouette_area = silhouette.iter().filter(|&&s| s).count();
        let hollow_area = silhouette
            .iter()
            .zip(painted.iter())
            .filter(|&(&s, &p)| s && !p)
            .count();
        let area_per_symbol = silhouette_area as f64 / symbol_count as f64;
        let hollow_fraction = hollow_area as f64 / silhouette_area as f64;

        let shape = self
            .config
            .shape_areas
            .nearest(&area_per_symbol)
            .ok_or(ClassifyError::EmptyTable("shape area"))?;
        let fill = self
            .config
            .hollow_fractions
            .nearest(&hollow_fraction)
            .ok_or(ClassifyError::EmptyTable("fill"))?;

        let card = Card::new(count, colour, fill, shape);
        debug_print(&format!(
            "classify: {} symbols, colour {:?}, {:.0} px/symbol, {:.2} hollow => {}",
            symbol_count, sampled_colour, area_per_symbol, hollow_fraction, card
        ));

        Ok(Classification {
            card,
            symbol_count,
            sampled_colour,
            area_per_symbol,
            hollow_fraction,
        })
    }
}

/// Luma with 0.299 / 0.587 / 0.114 weights, truncated
pub fn greyscale(region: &RgbImage) -> Vec<u8> {
    region
        .pixels()
        .map(|p| {
            let [r, g, b] = p.0;
            (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) as u8
        })
        .collect()
}

/// Row-major index of the first darkest pixel
fn darkest_index(grey: &[u8]) -> usize {
    let mut best = 0;
    for (i, &g) in grey.iter().enumerate() {
        if g < grey[best] {
            best = i;
        }
    }
    best
}

/// Painted pixels plus the pixels the background cannot reach from the
/// top-left corner (4-connectivity). When the corner itself is painted, only
/// that painted blob counts as reached and everything is silhouette.
fn silhouette(painted: &[bool], width: usize, height: usize) -> Vec<bool> {
    let seed_value = painted[0];
    let mut reached = vec![false; painted.len()];
    let mut queue = VecDeque::new();
    reached[0] = true;
    queue.push_back(0usize);
    while let Some(i) = queue.pop_front() {
        let (x, y) = (i % width, i / width);
        let mut neighbours = [None; 4];
        if x > 0 {
            neighbours[0] = Some(i - 1);
        }
        if x + 1 < width {
            neighbours[1] = Some(i + 1);
        }
        if y > 0 {
            neighbours[2] = Some(i - width);
        }
        if y + 1 < height {
            neighbours[3] = Some(i + width);
        }
        for j in neighbours.into_iter().flatten() {
            if !reached[j] && painted[j] == seed_value {
                reached[j] = true;
                queue.push_back(j);
            }
        }
    }
    painted
        .iter()
        .zip(reached.iter())
        .map(|(&p, &r)| p || !r)
        .collect()
}

/// Number of positions whose value differs from the previous one, the first
/// position being compared with the last.
fn count_crossings(strip: &[bool]) -> usize {
    let n = strip.len();
    (0..n).filter(|&i| strip[i] != strip[(i + n - 1) % n]).count()
}
