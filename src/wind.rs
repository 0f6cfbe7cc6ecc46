use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static WIND_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{3}|VRB)(\d{2,3})(?:G(\d{2,3}))?KT\b").expect("invalid wind regex")
});

/// A surface wind group such as `27015G25KT` or `VRB05KT`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindGroup {
    /// `None` when the wind is variable.
    pub direction_deg: Option<u32>,
    pub speed_kt: u32,
    pub gust_kt: Option<u32>,
}

/// First wind group in normalized text. Later groups are ignored.
///
/// The direction is the reported integer as is; out of range values such as
/// `999` are not rejected or wrapped here.
pub fn extract_wind(text: &str) -> Option<WindGroup> {
    let captures = WIND_REGEX.captures(text)?;

    let direction_deg = match &captures[1] {
        "VRB" => None,
        digits => Some(digits.parse().ok()?),
    };
    let speed_kt = captures[2].parse().ok()?;
    let gust_kt = match captures.get(3) {
        Some(gust) => Some(gust.as_str().parse().ok()?),
        None => None,
    };

    Some(WindGroup {
        direction_deg,
        speed_kt,
        gust_kt,
    })
}
