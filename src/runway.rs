use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::DataParseError;
use crate::record::WeatherRecord;
use crate::tools::math::{round_to, wind_components};

static RUNWAY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:RWY\s*)?(\d{1,2})([LRC])?$").expect("invalid runway regex")
});

/// A runway designator such as `04L` or `27`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runway {
    pub number: u8,
    pub side: Option<char>,
}

impl Runway {
    /// Magnetic heading implied by the designator number.
    pub fn heading(&self) -> u32 {
        u32::from(self.number) * 10
    }
}

impl fmt::Display for Runway {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}", self.number)?;
        if let Some(side) = self.side {
            write!(f, "{side}")?;
        }
        Ok(())
    }
}

impl FromStr for Runway {
    type Err = DataParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let invalid = || DataParseError::InvalidRunway(s.to_string());

        let captures = RUNWAY_REGEX.captures(&upper).ok_or_else(invalid)?;
        let number: u8 = captures[1].parse().map_err(|_| invalid())?;
        if !(1..=36).contains(&number) {
            return Err(invalid());
        }
        let side = captures.get(2).and_then(|m| m.as_str().chars().next());

        Ok(Runway { number, side })
    }
}

/// Acceptable crosswind for runway selection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrosswindLimits {
    pub max_crosswind_kt: f64,
}

impl Default for CrosswindLimits {
    fn default() -> Self {
        CrosswindLimits {
            max_crosswind_kt: 20.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrosswindSide {
    Left,
    Right,
}

/// Wind resolved along and across a runway. Speeds in knots, rounded to 0.1.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunwayWindComponent {
    pub runway: Runway,
    pub runway_heading: u32,
    pub wind_direction_deg: u32,
    pub wind_speed_kt: u32,
    /// Negative values are a tailwind.
    pub headwind_kt: f64,
    pub crosswind_kt: f64,
    pub crosswind_side: CrosswindSide,
    pub gust_headwind_kt: Option<f64>,
    pub gust_crosswind_kt: Option<f64>,
}

impl RunwayWindComponent {
    pub fn is_tailwind(&self) -> bool {
        self.headwind_kt < 0.0
    }

    /// Worst crosswind including gusts.
    pub fn max_crosswind_kt(&self) -> f64 {
        self.gust_crosswind_kt
            .map_or(self.crosswind_kt, |gust| gust.max(self.crosswind_kt))
    }
}

impl WeatherRecord {
    /// Head and crosswind for `runway`. `None` when the wind is variable or missing.
    pub fn runway_wind_component(&self, runway: &Runway) -> Option<RunwayWindComponent> {
        let direction = self.wind_direction_deg?;
        let speed = self.wind_speed_kt?;
        let heading = runway.heading();

        let (headwind, crosswind) =
            wind_components(f64::from(speed), f64::from(direction), f64::from(heading));
        let gust = self
            .wind_gust_kt
            .map(|gust| wind_components(f64::from(gust), f64::from(direction), f64::from(heading)));

        Some(RunwayWindComponent {
            runway: runway.clone(),
            runway_heading: heading,
            wind_direction_deg: direction,
            wind_speed_kt: speed,
            headwind_kt: round_to(headwind, 1),
            crosswind_kt: round_to(crosswind.abs(), 1),
            crosswind_side: if crosswind > 0.0 {
                CrosswindSide::Right
            } else {
                CrosswindSide::Left
            },
            gust_headwind_kt: gust.map(|(head, _)| round_to(head, 1)),
            gust_crosswind_kt: gust.map(|(_, cross)| round_to(cross.abs(), 1)),
        })
    }

    /// Whether the crosswind on `runway` is within `limits`. Unknown wind is acceptable.
    pub fn is_crosswind_acceptable(&self, runway: &Runway, limits: &CrosswindLimits) -> bool {
        self.runway_wind_component(runway)
            .map_or(true, |component| {
                component.max_crosswind_kt() <= limits.max_crosswind_kt
            })
    }
}
