//! Nearest-neighbour lookup against a small reference table
//!
//! The classifier turns measured quantities (a sampled colour, a per-shape
//! area, a hollow fraction) into attribute values by picking the reference
//! entry at the smallest distance. The tables are data, kept in the
//! configuration, so they can be tuned per screen resolution.

use serde::{Deserialize, Serialize};

/// Distance between a measurement and a reference point.
pub trait Distance {
    fn distance(&self, other: &Self) -> f64;
}

impl Distance for f64 {
    fn distance(&self, other: &Self) -> f64 {
        (self - other).abs()
    }
}

/// Euclidean distance in RGB space
impl Distance for [u8; 3] {
    fn distance(&self, other: &Self) -> f64 {
        self.iter()
            .zip(other.iter())
            .map(|(&x, &y)| {
                let d = x as f64 - y as f64;
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reference<K, V> {
    pub reference: K,
    pub value: V,
}

/// A reference table mapping points to values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NearestTable<K, V> {
    entries: Vec<Reference<K, V>>,
}

impl<K: Distance, V: Copy> NearestTable<K, V> {
    pub fn new(entries: Vec<(K, V)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(reference, value)| Reference { reference, value })
                .collect(),
        }
    }

    pub fn entries(&self) -> &[Reference<K, V>] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of the closest reference; the first entry wins ties.
    /// Returns None for an empty table.
    pub fn nearest(&self, key: &K) -> Option<V> {
        let mut best: Option<(f64, V)> = None;
        for entry in &self.entries {
            let d = entry.reference.distance(key);
            match best {
                Some((best_d, _)) if best_d <= d => {}
                _ => best = Some((d, entry.value)),
            }
        }
        best.map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_closest_scalar() {
        let table = NearestTable::new(vec![(0.0, 'a'), (0.5, 'c'), (0.1, 'b')]);
        assert_eq!(table.nearest(&0.02), Some('a'));
        assert_eq!(table.nearest(&0.2), Some('b'));
        assert_eq!(table.nearest(&0.9), Some('c'));
        // equidistant from 0.0 and 0.1: first entry wins
        assert_eq!(table.nearest(&0.05), Some('a'));
    }

    #[test]
    fn picks_closest_colour() {
        let table = NearestTable::new(vec![
            ([98, 37, 142], "purple"),
            ([231, 3, 7], "red"),
            ([3, 96, 56], "green"),
        ]);
        assert_eq!(table.nearest(&[200, 30, 30]), Some("red"));
        assert_eq!(table.nearest(&[20, 120, 60]), Some("green"));
        assert_eq!(table.nearest(&[120, 60, 160]), Some("purple"));
    }

    #[test]
    fn empty_table() {
        let table: NearestTable<f64, u8> = NearestTable::new(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.nearest(&1.0), None);
    }

    #[test]
    fn json_layout() {
        let table = NearestTable::new(vec![(1400.0, 1u8)]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"[{"reference":1400.0,"value":1}]"#);
        let back: NearestTable<f64, u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
