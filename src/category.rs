use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DataParseError;

/// FAA flight category.
///
/// Variants are declared from most to least restrictive, so `Ord` ranks them
/// by severity and `min` picks the worse of two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FlightCategory {
    Lifr,
    Ifr,
    Mvfr,
    Vfr,
}

impl FlightCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightCategory::Lifr => "LIFR",
            FlightCategory::Ifr => "IFR",
            FlightCategory::Mvfr => "MVFR",
            FlightCategory::Vfr => "VFR",
        }
    }

    /// Severity rank, 0 for LIFR up to 3 for VFR.
    pub fn rank(&self) -> u8 {
        match self {
            FlightCategory::Lifr => 0,
            FlightCategory::Ifr => 1,
            FlightCategory::Mvfr => 2,
            FlightCategory::Vfr => 3,
        }
    }

    pub fn weather_category(&self) -> WeatherCategory {
        WeatherCategory::from(*self)
    }
}

impl fmt::Display for FlightCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FlightCategory {
    type Err = DataParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LIFR" => Ok(FlightCategory::Lifr),
            "IFR" => Ok(FlightCategory::Ifr),
            "MVFR" => Ok(FlightCategory::Mvfr),
            "VFR" => Ok(FlightCategory::Vfr),
            _ => Err(DataParseError::InvalidString(s.to_string())),
        }
    }
}

/// Meteorological condition names used for program and airport status badges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WeatherCategory {
    Limc,
    Imc,
    Lvmc,
    Vmc,
}

impl WeatherCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCategory::Limc => "LIMC",
            WeatherCategory::Imc => "IMC",
            WeatherCategory::Lvmc => "LVMC",
            WeatherCategory::Vmc => "VMC",
        }
    }

    /// Maps a flight category code. Anything unrecognized is treated as VMC.
    pub fn from_flight_code(code: &str) -> WeatherCategory {
        code.parse::<FlightCategory>()
            .map(WeatherCategory::from)
            .unwrap_or(WeatherCategory::Vmc)
    }

    /// Badge color as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            WeatherCategory::Vmc => "#22c55e",
            WeatherCategory::Lvmc => "#eab308",
            WeatherCategory::Imc => "#f97316",
            WeatherCategory::Limc => "#ef4444",
        }
    }
}

impl From<FlightCategory> for WeatherCategory {
    fn from(category: FlightCategory) -> Self {
        match category {
            FlightCategory::Vfr => WeatherCategory::Vmc,
            FlightCategory::Mvfr => WeatherCategory::Lvmc,
            FlightCategory::Ifr => WeatherCategory::Imc,
            FlightCategory::Lifr => WeatherCategory::Limc,
        }
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WeatherCategory {
    type Err = DataParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LIMC" => Ok(WeatherCategory::Limc),
            "IMC" => Ok(WeatherCategory::Imc),
            "LVMC" => Ok(WeatherCategory::Lvmc),
            "VMC" => Ok(WeatherCategory::Vmc),
            _ => Err(DataParseError::InvalidString(s.to_string())),
        }
    }
}

/// Category implied by the ceiling alone. No ceiling is VFR.
pub fn classify_ceiling(ceiling_ft: Option<u32>) -> FlightCategory {
    match ceiling_ft {
        None => FlightCategory::Vfr,
        Some(ft) if ft < 500 => FlightCategory::Lifr,
        Some(ft) if ft < 1000 => FlightCategory::Ifr,
        Some(ft) if ft <= 3000 => FlightCategory::Mvfr,
        Some(_) => FlightCategory::Vfr,
    }
}

/// Category implied by the visibility alone. No visibility is VFR.
pub fn classify_visibility(visibility_sm: Option<f64>) -> FlightCategory {
    match visibility_sm {
        None => FlightCategory::Vfr,
        Some(sm) if sm < 1.0 => FlightCategory::Lifr,
        Some(sm) if sm < 3.0 => FlightCategory::Ifr,
        Some(sm) if sm <= 5.0 => FlightCategory::Mvfr,
        Some(_) => FlightCategory::Vfr,
    }
}

/// The more restrictive of the ceiling and visibility categories.
pub fn classify(ceiling_ft: Option<u32>, visibility_sm: Option<f64>) -> FlightCategory {
    classify_ceiling(ceiling_ft).min(classify_visibility(visibility_sm))
}
