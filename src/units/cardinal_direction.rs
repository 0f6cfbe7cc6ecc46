use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DataParseError;

/// Sixteen point compass rose, clockwise from north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardinalDirection {
    North,
    NorthNorthEast,
    NorthEast,
    EastNorthEast,
    East,
    EastSouthEast,
    SouthEast,
    SouthSouthEast,
    South,
    SouthSouthWest,
    SouthWest,
    WestSouthWest,
    West,
    WestNorthWest,
    NorthWest,
    NorthNorthWest,
}

const COMPASS_ROSE: [CardinalDirection; 16] = [
    CardinalDirection::North,
    CardinalDirection::NorthNorthEast,
    CardinalDirection::NorthEast,
    CardinalDirection::EastNorthEast,
    CardinalDirection::East,
    CardinalDirection::EastSouthEast,
    CardinalDirection::SouthEast,
    CardinalDirection::SouthSouthEast,
    CardinalDirection::South,
    CardinalDirection::SouthSouthWest,
    CardinalDirection::SouthWest,
    CardinalDirection::WestSouthWest,
    CardinalDirection::West,
    CardinalDirection::WestNorthWest,
    CardinalDirection::NorthWest,
    CardinalDirection::NorthNorthWest,
];

impl CardinalDirection {
    /// Nearest compass point, each point covering 22.5 degrees centered on it.
    pub fn from_degrees(degrees: u32) -> CardinalDirection {
        let index = (f64::from(degrees % 360) / 22.5).round() as usize % COMPASS_ROSE.len();
        COMPASS_ROSE[index]
    }

    pub fn to_degrees(&self) -> f64 {
        let index = COMPASS_ROSE
            .iter()
            .position(|d| d == self)
            .unwrap_or_default();
        index as f64 * 22.5
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardinalDirection::North => "N",
            CardinalDirection::NorthNorthEast => "NNE",
            CardinalDirection::NorthEast => "NE",
            CardinalDirection::EastNorthEast => "ENE",
            CardinalDirection::East => "E",
            CardinalDirection::EastSouthEast => "ESE",
            CardinalDirection::SouthEast => "SE",
            CardinalDirection::SouthSouthEast => "SSE",
            CardinalDirection::South => "S",
            CardinalDirection::SouthSouthWest => "SSW",
            CardinalDirection::SouthWest => "SW",
            CardinalDirection::WestSouthWest => "WSW",
            CardinalDirection::West => "W",
            CardinalDirection::WestNorthWest => "WNW",
            CardinalDirection::NorthWest => "NW",
            CardinalDirection::NorthNorthWest => "NNW",
        }
    }
}

impl fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CardinalDirection {
    type Err = DataParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        COMPASS_ROSE
            .iter()
            .find(|d| d.as_str() == upper)
            .copied()
            .ok_or_else(|| DataParseError::InvalidString(s.to_string()))
    }
}
