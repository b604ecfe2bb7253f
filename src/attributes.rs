//! The four attribute axes of a Set card (count, colour, fill, shape)
//!
//! Each axis has exactly 3 values and behaves like the integers modulo 3:
//! three values form a valid set on an axis when their indexes sum to 0 mod 3,
//! i.e. when they are all the same or all different. The completion function
//! `third` gives, for two values, the only value that closes such a triple.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A value on one attribute axis.
pub trait Attribute: Copy + Eq + fmt::Debug + Sized + 'static {
    /// All the values of the axis, in index order
    const ALL: [Self; 3];

    /// Position of the value on the axis (0, 1 or 2)
    fn index(self) -> usize;

    /// Lower-case name used in text and JSON
    fn name(self) -> &'static str;

    fn from_index(i: usize) -> Self {
        Self::ALL[i % 3]
    }

    /// The value which makes (self, other, value) all the same or all
    /// different on this axis.
    fn third(self, other: Self) -> Self {
        Self::from_index(third_index(self.index(), other.index()))
    }
}

/// Completion on raw axis indexes: -(a + b) mod 3
#[inline]
pub fn third_index(a: usize, b: usize) -> usize {
    (6 - (a % 3) - (b % 3)) % 3
}

/// Error returned when parsing an attribute value from text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("'{text}' is not a valid {} value", .axis.name())]
pub struct UnknownAttribute {
    pub axis: Axis,
    pub text: String,
}

macro_rules! attribute_axis {
    (
        $(#[$meta:meta])*
        $ty:ident, $axis:expr, [$($variant:ident => $name:literal),+ $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        #[repr(u8)]
        pub enum $ty {
            $($variant),+
        }

        impl Attribute for $ty {
            const ALL: [Self; 3] = [$($ty::$variant),+];

            fn index(self) -> usize {
                self as usize
            }

            fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownAttribute;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let lower = s.trim().to_ascii_lowercase();
                Self::ALL
                    .into_iter()
                    .find(|value| value.name() == lower)
                    .ok_or(UnknownAttribute { axis: $axis, text: s.to_string() })
            }
        }
    };
}

attribute_axis!(
    /// Number of symbols drawn on the card.
    Count, Axis::Count, [One => "1", Two => "2", Three => "3"]
);

attribute_axis!(
    /// Colour of the symbols.
    Colour, Axis::Colour, [Purple => "purple", Red => "red", Green => "green"]
);

attribute_axis!(
    /// Shading of the symbols.
    Fill, Axis::Fill, [Solid => "solid", Striped => "striped", Open => "open"]
);

attribute_axis!(
    /// Symbol outline.
    Shape, Axis::Shape, [Diamond => "diamond", Squiggle => "squiggle", Oval => "oval"]
);

impl Count {
    /// Number of symbols as an integer (1..=3)
    pub fn value(self) -> usize {
        self.index() + 1
    }

    pub fn from_value(n: usize) -> Option<Self> {
        match n {
            1 => Some(Count::One),
            2 => Some(Count::Two),
            3 => Some(Count::Three),
            _ => None,
        }
    }
}

/// Names the four axes, so that generic code can walk them without relying
/// on tuple positions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Count,
    Colour,
    Fill,
    Shape,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Count, Axis::Colour, Axis::Fill, Axis::Shape];

    pub fn name(self) -> &'static str {
        match self {
            Axis::Count => "count",
            Axis::Colour => "colour",
            Axis::Fill => "fill",
            Axis::Shape => "shape",
        }
    }

    /// Weight of the axis digit in the base-3 card index
    pub fn weight(self) -> usize {
        match self {
            Axis::Count => 27,
            Axis::Colour => 9,
            Axis::Fill => 3,
            Axis::Shape => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_axis<A: Attribute>() {
        for a in A::ALL {
            // idempotent on equal inputs
            assert_eq!(a.third(a), a);
            for b in A::ALL {
                let c = a.third(b);
                assert!(A::ALL.contains(&c));
                assert_eq!(c, b.third(a));
                if a != b {
                    assert_ne!(c, a);
                    assert_ne!(c, b);
                }
                // closing the triple from any pair gives back the third value
                assert_eq!(a.third(c), b);
            }
        }
    }

    #[test]
    fn third_on_every_axis() {
        check_axis::<Count>();
        check_axis::<Colour>();
        check_axis::<Fill>();
        check_axis::<Shape>();
    }

    #[test]
    fn third_index_table() {
        assert_eq!(third_index(0, 1), 2);
        assert_eq!(third_index(0, 2), 1);
        assert_eq!(third_index(1, 2), 0);
        assert_eq!(third_index(2, 2), 2);
    }

    #[test]
    fn parse_names() {
        assert_eq!("Purple".parse::<Colour>(), Ok(Colour::Purple));
        assert_eq!("open".parse::<Fill>(), Ok(Fill::Open));
        assert_eq!("2".parse::<Count>(), Ok(Count::Two));
        let err = "hexagon".parse::<Shape>().unwrap_err();
        assert_eq!(err.axis, Axis::Shape);
    }

    #[test]
    fn count_values() {
        assert_eq!(Count::Three.value(), 3);
        assert_eq!(Count::from_value(1), Some(Count::One));
        assert_eq!(Count::from_value(0), None);
    }
}
