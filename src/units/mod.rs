pub mod cardinal_direction;
pub mod measurement;

pub use cardinal_direction::CardinalDirection;
pub use measurement::Measurement;

use std::fmt;

use serde::{Deserialize, Serialize};

pub const METERS_PER_STATUTE_MILE: f64 = 1609.34;
pub const METERS_PER_FOOT: f64 = 0.3048;
pub const HPA_PER_INHG: f64 = 33.8639;

/// Unit system a value is expressed in.
///
/// Reports come in aviation units: statute miles for visibility, feet for
/// ceilings, knots for wind and inches of mercury for pressure. That mix is
/// `English` here, with `Knots` kept distinct for speeds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Metric,
    English,
    Knots,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::English => "english",
            Units::Knots => "knots",
        }
    }

    pub fn convert(&self, measurement: &Measurement, destination: &Units, value: f64) -> f64 {
        let unit_tuple = (self, measurement, destination);
        match unit_tuple {
            (Units::English, Measurement::Length, Units::Metric) => value * METERS_PER_FOOT,
            (Units::English, Measurement::Visibility, Units::Metric) => {
                value * METERS_PER_STATUTE_MILE
            }
            (Units::English, Measurement::Pressure, Units::Metric) => value * HPA_PER_INHG,

            (Units::Metric, Measurement::Length, Units::English) => value / METERS_PER_FOOT,
            (Units::Metric, Measurement::Visibility, Units::English) => {
                value / METERS_PER_STATUTE_MILE
            }
            (Units::Metric, Measurement::Pressure, Units::English) => value / HPA_PER_INHG,

            (Units::Knots, Measurement::Speed, Units::Metric) => value * 0.514,
            (Units::Knots, Measurement::Speed, Units::English) => value * 1.15,

            _ => value,
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
