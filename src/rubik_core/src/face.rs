//! Face and color identities shared by every part of the engine.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::CubeError;

/// One of the six fixed sides of the cube.
///
/// The discriminants are the face's position in [`FaceId::ALL`], and the
/// first four are the side faces in the order a horizontal twist carries
/// rows around the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FaceId {
    Front,
    Right,
    Back,
    Left,
    Top,
    Bottom,
}

impl FaceId {
    pub const ALL: [Self; 6] = {
        use FaceId::*;
        let v = [Front, Right, Back, Left, Top, Bottom];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The faces that can be rotated into the front slot by reorienting.
    pub const SIDES: [Self; 4] = [FaceId::Front, FaceId::Right, FaceId::Back, FaceId::Left];

    /// Whether this face is one of [`FaceId::SIDES`].
    #[must_use]
    pub fn is_side(self) -> bool {
        !matches!(self, FaceId::Top | FaceId::Bottom)
    }

    /// The color this face carries on a solved cube.
    #[must_use]
    pub fn default_color(self) -> Color {
        DEFAULT_COLORS[self as usize]
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FaceId::Front => "front",
            FaceId::Right => "right",
            FaceId::Back => "back",
            FaceId::Left => "left",
            FaceId::Top => "top",
            FaceId::Bottom => "bottom",
        }
    }
}

impl Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FaceId {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FaceId::ALL
            .into_iter()
            .find(|face| face.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CubeError::InvalidFace(s.to_owned()))
    }
}

impl TryFrom<u8> for FaceId {
    type Error = CubeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        FaceId::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| CubeError::InvalidFace(value.to_string()))
    }
}

impl TryFrom<String> for FaceId {
    type Error = CubeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FaceId> for String {
    fn from(face: FaceId) -> Self {
        face.name().to_owned()
    }
}

/// A sticker color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Red,
    Orange,
}

impl Color {
    /// Single letter abbreviation used by the text net.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::Orange => 'O',
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Solved-state color of every face, indexed by `FaceId as usize`.
pub const DEFAULT_COLORS: [Color; 6] = [
    Color::Red,    // Front
    Color::Blue,   // Right
    Color::Orange, // Back
    Color::Green,  // Left
    Color::White,  // Top
    Color::Yellow, // Bottom
];
