//! Weather extraction and flight category classification for ATIS and METAR text.
//!
//! ```
//! use atiswx::{FlightCategory, WeatherRecord};
//!
//! let record = WeatherRecord::parse("27015G25KT 10SM BKN025 A2992");
//! assert_eq!(record.flight_category, Some(FlightCategory::Mvfr));
//! assert_eq!(record.summary(), "MVFR 270@15G25 10SM CIG025");
//! ```

pub mod altimeter;
pub mod category;
pub mod ceiling;
pub mod error;
pub mod normalize;
pub mod record;
pub mod runway;
pub mod summary;
pub mod tools;
pub mod units;
pub mod visibility;
pub mod wind;

pub use altimeter::{extract_altimeter, extract_altimeter_setting, AltimeterSource};
pub use category::{classify, classify_ceiling, classify_visibility, FlightCategory, WeatherCategory};
pub use ceiling::extract_ceiling;
pub use error::{DataParseError, Result};
pub use normalize::normalize;
pub use record::WeatherRecord;
pub use runway::{CrosswindLimits, CrosswindSide, Runway, RunwayWindComponent};
pub use summary::format_summary;
pub use visibility::{extract_visibility, extract_visibility_reading, VisibilityQualifier, VisibilityReading};
pub use wind::{extract_wind, WindGroup};
