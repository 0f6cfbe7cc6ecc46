use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::altimeter::extract_altimeter;
use crate::category::{classify, FlightCategory, WeatherCategory};
use crate::ceiling::extract_ceiling;
use crate::error::Result;
use crate::normalize::normalize;
use crate::summary::format_summary;
use crate::units::{CardinalDirection, Measurement, Units};
use crate::visibility::extract_visibility;
use crate::wind::extract_wind;

/// Normalized weather extracted from one ATIS or METAR text.
///
/// Fields that could not be found are `None`. The category fields are only
/// `None` when the input text was empty or blank.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// `None` for variable (`VRB`) or missing wind.
    pub wind_direction_deg: Option<u32>,
    pub wind_speed_kt: Option<u32>,
    pub wind_gust_kt: Option<u32>,
    pub visibility_sm: Option<f64>,
    pub ceiling_ft: Option<u32>,
    pub altimeter_inhg: Option<f64>,
    pub flight_category: Option<FlightCategory>,
    pub weather_category: Option<WeatherCategory>,
}

impl WeatherRecord {
    pub fn parse(raw: &str) -> WeatherRecord {
        let text = normalize(raw);
        if text.is_empty() {
            trace!("empty weather text, skipping classification");
            return WeatherRecord::default();
        }

        let wind = extract_wind(&text);
        let visibility_sm = extract_visibility(&text);
        let ceiling_ft = extract_ceiling(&text);
        let altimeter_inhg = extract_altimeter(&text);

        let flight_category = classify(ceiling_ft, visibility_sm);

        debug!(
            category = %flight_category,
            ceiling_ft = ?ceiling_ft,
            visibility_sm = ?visibility_sm,
            "parsed weather text"
        );

        WeatherRecord {
            wind_direction_deg: wind.as_ref().and_then(|w| w.direction_deg),
            wind_speed_kt: wind.as_ref().map(|w| w.speed_kt),
            wind_gust_kt: wind.as_ref().and_then(|w| w.gust_kt),
            visibility_sm,
            ceiling_ft,
            altimeter_inhg,
            flight_category: Some(flight_category),
            weather_category: Some(WeatherCategory::from(flight_category)),
        }
    }

    /// Reads a serialized record. Stored categories are rederived from the
    /// ceiling and visibility; a record without a flight category stays
    /// unclassified.
    pub fn from_json(data: &str) -> Result<Self> {
        let mut record: WeatherRecord = serde_json::from_str(data)?;
        match record.flight_category {
            Some(_) => {
                let category = classify(record.ceiling_ft, record.visibility_sm);
                record.flight_category = Some(category);
                record.weather_category = Some(WeatherCategory::from(category));
            }
            None => record.weather_category = None,
        }
        Ok(record)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// One line summary such as `MVFR 270@15G25 10SM CIG025`.
    pub fn summary(&self) -> String {
        format_summary(self)
    }

    pub fn is_variable_wind(&self) -> bool {
        self.wind_speed_kt.is_some() && self.wind_direction_deg.is_none()
    }

    pub fn wind_cardinal_direction(&self) -> Option<CardinalDirection> {
        self.wind_direction_deg.map(CardinalDirection::from_degrees)
    }

    /// Sustained wind speed converted from knots.
    pub fn wind_speed(&self, units: &Units) -> Option<f64> {
        self.wind_speed_kt
            .map(|kt| Units::Knots.convert(&Measurement::Speed, units, f64::from(kt)))
    }

    pub fn wind_gust(&self, units: &Units) -> Option<f64> {
        self.wind_gust_kt
            .map(|kt| Units::Knots.convert(&Measurement::Speed, units, f64::from(kt)))
    }

    pub fn visibility_meters(&self) -> Option<f64> {
        self.visibility_sm.map(|sm| {
            Units::English
                .convert(&Measurement::Visibility, &Units::Metric, sm)
                .round()
        })
    }

    pub fn ceiling_meters(&self) -> Option<f64> {
        self.ceiling_ft.map(|ft| {
            Units::English
                .convert(&Measurement::Length, &Units::Metric, f64::from(ft))
                .round()
        })
    }

    pub fn altimeter_hpa(&self) -> Option<f64> {
        self.altimeter_inhg.map(|inhg| {
            Units::English
                .convert(&Measurement::Pressure, &Units::Metric, inhg)
                .round()
        })
    }
}

impl fmt::Display for WeatherRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}
