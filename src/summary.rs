use itertools::Itertools;

use crate::record::WeatherRecord;

fn wind_segment(record: &WeatherRecord) -> Option<String> {
    let speed = record.wind_speed_kt?;
    let direction = match record.wind_direction_deg {
        Some(deg) => format!("{deg:03}"),
        None => "VRB".to_string(),
    };
    let gust = match record.wind_gust_kt {
        Some(gust) => format!("G{gust}"),
        None => String::new(),
    };
    Some(format!("{direction}@{speed}{gust}"))
}

/// Renders `CATEGORY WIND VISIBILITY CEILING`, skipping any part that is absent.
pub fn format_summary(record: &WeatherRecord) -> String {
    [
        record.flight_category.map(|c| c.to_string()),
        wind_segment(record),
        record.visibility_sm.map(|sm| format!("{sm}SM")),
        record.ceiling_ft.map(|ft| format!("CIG{:03}", ft / 100)),
    ]
    .into_iter()
    .flatten()
    .join(" ")
}
