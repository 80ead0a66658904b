//! Alignment codes.
//!
//! An alignment code names a point on an element's box with two characters:
//! the vertical anchor (`t`, `c`, `b`) followed by the horizontal anchor
//! (`l`, `c`, `r`). An [`AlignPair`] couples the pin's code with the base's
//! code, written `"<pin> <base>"`: `"tl bl"` puts the pin's top-left corner
//! on the base's bottom-left corner.

use std::fmt;
use std::str::FromStr;

use nom::{
    character::complete::{one_of, space0, space1},
    combinator::{all_consuming, map, map_res},
    sequence::{delimited, pair, separated_pair},
    IResult,
};

use crate::errors::AlignError;
use crate::types::{Point, Size};

/// Vertical anchor of an alignment code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Vertical {
    #[default]
    Top,
    Center,
    Bottom,
}

impl Vertical {
    pub fn as_char(&self) -> char {
        match self {
            Vertical::Top => 't',
            Vertical::Center => 'c',
            Vertical::Bottom => 'b',
        }
    }

    /// Position along the height: 0 for top, 0.5 for center, 1 for bottom.
    pub fn fraction(&self) -> f64 {
        match self {
            Vertical::Top => 0.0,
            Vertical::Center => 0.5,
            Vertical::Bottom => 1.0,
        }
    }

    /// Swap top and bottom. Center is unchanged.
    pub fn flip(&self) -> Self {
        match self {
            Vertical::Top => Vertical::Bottom,
            Vertical::Center => Vertical::Center,
            Vertical::Bottom => Vertical::Top,
        }
    }
}

impl TryFrom<char> for Vertical {
    type Error = AlignError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            't' => Ok(Vertical::Top),
            'c' => Ok(Vertical::Center),
            'b' => Ok(Vertical::Bottom),
            found => Err(AlignError::UnknownDirection { found }),
        }
    }
}

/// Horizontal anchor of an alignment code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Horizontal {
    #[default]
    Left,
    Center,
    Right,
}

impl Horizontal {
    pub fn as_char(&self) -> char {
        match self {
            Horizontal::Left => 'l',
            Horizontal::Center => 'c',
            Horizontal::Right => 'r',
        }
    }

    /// Position along the width: 0 for left, 0.5 for center, 1 for right.
    pub fn fraction(&self) -> f64 {
        match self {
            Horizontal::Left => 0.0,
            Horizontal::Center => 0.5,
            Horizontal::Right => 1.0,
        }
    }

    /// Swap left and right. Center is unchanged.
    pub fn flip(&self) -> Self {
        match self {
            Horizontal::Left => Horizontal::Right,
            Horizontal::Center => Horizontal::Center,
            Horizontal::Right => Horizontal::Left,
        }
    }
}

impl TryFrom<char> for Horizontal {
    type Error = AlignError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'l' => Ok(Horizontal::Left),
            'c' => Ok(Horizontal::Center),
            'r' => Ok(Horizontal::Right),
            found => Err(AlignError::UnknownDirection { found }),
        }
    }
}

/// A point on an element's box, e.g. `tl` or `cr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AlignCode {
    pub vertical: Vertical,
    pub horizontal: Horizontal,
}

impl AlignCode {
    pub const fn new(vertical: Vertical, horizontal: Horizontal) -> Self {
        Self { vertical, horizontal }
    }

    /// Anchor offset inside a box of the given size.
    pub fn anchor(&self, size: Size) -> Point {
        Point::new(
            size.width * self.horizontal.fraction(),
            size.height * self.vertical.fraction(),
        )
    }
}

impl fmt::Display for AlignCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.vertical.as_char(), self.horizontal.as_char())
    }
}

impl FromStr for AlignCode {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_consuming(delimited(space0, align_code, space0))(s)
            .map(|(_, code)| code)
            .map_err(|_| AlignError::Malformed { input: s.to_string() })
    }
}

/// Pin alignment and base alignment, written `"<pin> <base>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlignPair {
    pub pin: AlignCode,
    pub base: AlignCode,
}

impl AlignPair {
    pub const fn new(pin: AlignCode, base: AlignCode) -> Self {
        Self { pin, base }
    }

    /// Apply the same transformation to both codes.
    pub fn map_codes(&self, f: impl Fn(AlignCode) -> AlignCode) -> Self {
        Self::new(f(self.pin), f(self.base))
    }

    /// Whether either code uses the given character.
    pub fn contains(&self, c: char) -> bool {
        [self.pin, self.base]
            .iter()
            .any(|code| code.vertical.as_char() == c || code.horizontal.as_char() == c)
    }

    /// Are the right sides of the pin and base aligned?
    pub fn is_right_aligned(&self) -> bool {
        self.pin.horizontal == Horizontal::Right && self.pin.horizontal == self.base.horizontal
    }

    /// Are the bottoms of the pin and base aligned?
    pub fn is_bottom_aligned(&self) -> bool {
        self.pin.vertical == Vertical::Bottom && self.pin.vertical == self.base.vertical
    }
}

impl Default for AlignPair {
    /// `"tl tl"`
    fn default() -> Self {
        let top_left = AlignCode::new(Vertical::Top, Horizontal::Left);
        Self::new(top_left, top_left)
    }
}

impl fmt::Display for AlignPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pin, self.base)
    }
}

impl FromStr for AlignPair {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_consuming(delimited(space0, align_pair, space0))(s)
            .map(|(_, pair)| pair)
            .map_err(|_| AlignError::Malformed { input: s.to_string() })
    }
}

impl TryFrom<&str> for AlignPair {
    type Error = AlignError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AlignPair {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AlignPair {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

fn vertical(input: &str) -> IResult<&str, Vertical> {
    map_res(one_of("tcb"), Vertical::try_from)(input)
}

fn horizontal(input: &str) -> IResult<&str, Horizontal> {
    map_res(one_of("lcr"), Horizontal::try_from)(input)
}

fn align_code(input: &str) -> IResult<&str, AlignCode> {
    map(pair(vertical, horizontal), |(v, h)| AlignCode::new(v, h))(input)
}

fn align_pair(input: &str) -> IResult<&str, AlignPair> {
    map(separated_pair(align_code, space1, align_code), |(pin, base)| {
        AlignPair::new(pin, base)
    })(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        let pair: AlignPair = "tl bl".parse().unwrap();
        assert_eq!(pair.pin, AlignCode::new(Vertical::Top, Horizontal::Left));
        assert_eq!(pair.base, AlignCode::new(Vertical::Bottom, Horizontal::Left));
        assert_eq!(pair.to_string(), "tl bl");
    }

    #[test]
    fn test_parse_tolerates_outer_whitespace() {
        let pair: AlignPair = "  cc  tr ".parse().unwrap();
        assert_eq!(pair.to_string(), "cc tr");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "tl", "lt tl", "tl  tlx", "tltl", "TL TL", "tx tl"] {
            assert!(
                matches!(input.parse::<AlignPair>(), Err(AlignError::Malformed { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_default_is_top_left() {
        assert_eq!(AlignPair::default().to_string(), "tl tl");
    }

    #[test]
    fn test_anchor_interpolation() {
        let size = Size::new(50.0, 20.0);
        let anchor = |s: &str| s.parse::<AlignCode>().unwrap().anchor(size);

        assert_eq!(anchor("tl"), Point::new(0.0, 0.0));
        assert_eq!(anchor("cc"), Point::new(25.0, 10.0));
        assert_eq!(anchor("br"), Point::new(50.0, 20.0));
        assert_eq!(anchor("bl"), Point::new(0.0, 20.0));
    }

    #[test]
    fn test_right_and_bottom_aligned() {
        let pair: AlignPair = "br br".parse().unwrap();
        assert!(pair.is_right_aligned());
        assert!(pair.is_bottom_aligned());

        let pair: AlignPair = "tr tl".parse().unwrap();
        assert!(!pair.is_right_aligned());
        assert!(!pair.is_bottom_aligned());
    }

    #[test]
    fn test_direction_from_char() {
        assert_eq!(Vertical::try_from('b'), Ok(Vertical::Bottom));
        assert_eq!(
            Horizontal::try_from('t'),
            Err(AlignError::UnknownDirection { found: 't' })
        );
    }

    #[test]
    fn test_contains() {
        let pair: AlignPair = "tc bl".parse().unwrap();
        assert!(pair.contains('c'));
        assert!(pair.contains('b'));
        assert!(!pair.contains('r'));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_string() {
        let pair: AlignPair = serde_json::from_str("\"bl tl\"").unwrap();
        assert_eq!(serde_json::to_string(&pair).unwrap(), "\"bl tl\"");
        assert!(serde_json::from_str::<AlignPair>("\"nope\"").is_err());
    }
}
