//! Synthetic card renderings for tests: flat symbols on a white card, sized
//! like the default slot layout.

use image::{imageops, Rgb, RgbImage};

use crate::attributes::Fill;
use crate::config::SlotLayout;

pub const PURPLE: [u8; 3] = [98, 37, 142];
pub const RED: [u8; 3] = [231, 3, 7];
pub const GREEN: [u8; 3] = [3, 96, 56];

pub const CARD_WIDTH: u32 = 166;
pub const CARD_HEIGHT: u32 = 88;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const TABLE: Rgb<u8> = Rgb([40, 40, 48]);

/// Distance between the centres of neighbouring symbols
const SYMBOL_SPACING: f64 = 55.0;
/// Outline thickness, relative to the symbol size
const OUTLINE: f64 = 0.12;

/// Symbol outlines with their half sizes in pixels
#[derive(Copy, Clone, Debug)]
pub enum Symbol {
    Diamond { rx: f64, ry: f64 },
    Ellipse { rx: f64, ry: f64 },
    Rect { rx: f64, ry: f64 },
}

/// Close to the default reference areas: 1400, 1848 and 2408 pixels
pub const DIAMOND: Symbol = Symbol::Diamond { rx: 25.0, ry: 28.0 };
pub const SQUIGGLE: Symbol = Symbol::Rect { rx: 22.0, ry: 21.0 };
pub const OVAL: Symbol = Symbol::Ellipse { rx: 38.0, ry: 20.0 };

impl Symbol {
    /// <= 1.0 inside the symbol, 1.0 on its border
    fn level(&self, dx: f64, dy: f64) -> f64 {
        match *self {
            Symbol::Diamond { rx, ry } => dx.abs() / rx + dy.abs() / ry,
            Symbol::Ellipse { rx, ry } => ((dx / rx).powi(2) + (dy / ry).powi(2)).sqrt(),
            Symbol::Rect { rx, ry } => (dx.abs() / rx).max(dy.abs() / ry),
        }
    }
}

/// A card showing `count` identical symbols
pub fn draw_card(count: usize, colour: [u8; 3], fill: Fill, symbol: Symbol) -> RgbImage {
    let mut img = RgbImage::from_pixel(CARD_WIDTH, CARD_HEIGHT, WHITE);
    let cy = CARD_HEIGHT as f64 / 2.0;
    for i in 0..count {
        let cx = CARD_WIDTH as f64 / 2.0 + (i as f64 - (count as f64 - 1.0) / 2.0) * SYMBOL_SPACING;
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let level = symbol.level(x as f64 - cx, y as f64 - cy);
            if level > 1.0 {
                continue;
            }
            let painted = match fill {
                Fill::Solid => true,
                Fill::Open => level > 1.0 - OUTLINE,
                Fill::Striped => level > 1.0 - OUTLINE || x % 4 != 0,
            };
            if painted {
                *pixel = Rgb(colour);
            }
        }
    }
    img
}

/// What an empty slot looks like: the table, no white corners
pub fn empty_slot() -> RgbImage {
    RgbImage::from_pixel(CARD_WIDTH, CARD_HEIGHT, TABLE)
}

/// A full screenshot with `cards` pasted into the first slots of `layout`
pub fn screenshot(cards: &[RgbImage], layout: &SlotLayout) -> RgbImage {
    let last = layout.slot_rect(layout.max_slots.saturating_sub(1)).unwrap();
    let mut screen = RgbImage::from_pixel(last.right + 10, last.bottom + 10, TABLE);
    for (slot, card) in cards.iter().enumerate() {
        let rect = layout.slot_rect(slot).unwrap();
        imageops::replace(&mut screen, card, rect.left as i64, rect.top as i64);
    }
    screen
}
