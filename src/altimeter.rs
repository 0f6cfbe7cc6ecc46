use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::tools::math::round_to;

static ALTIMETER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([AQ])(\d{4})\b").expect("invalid altimeter regex"));

const INHG_PER_HPA: f64 = 0.02953;

/// Unit the altimeter group was reported in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AltimeterSource {
    /// `A2992`, hundredths of an inch of mercury.
    InchesOfMercury,
    /// `Q1013`, QNH in hectopascals.
    Hectopascals,
}

/// First altimeter group in normalized text, always in inches of mercury.
pub fn extract_altimeter(text: &str) -> Option<f64> {
    extract_altimeter_setting(text).map(|(inhg, _)| inhg)
}

/// Like [`extract_altimeter`] but also reports which unit the group used.
pub fn extract_altimeter_setting(text: &str) -> Option<(f64, AltimeterSource)> {
    let captures = ALTIMETER_REGEX.captures(text)?;
    let digits: f64 = captures[2].parse().ok()?;

    match &captures[1] {
        "A" => Some((digits / 100.0, AltimeterSource::InchesOfMercury)),
        _ => Some((
            round_to(digits * INHG_PER_HPA, 2),
            AltimeterSource::Hectopascals,
        )),
    }
}
