/// Rounds half away from zero to the given number of decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Signed angle in degrees from `heading` to `direction`, normalized to (-180, 180].
pub fn relative_angle(direction: f64, heading: f64) -> f64 {
    let mut diff = (direction - heading) % 360.0;
    if diff > 180.0 {
        diff -= 360.0;
    } else if diff <= -180.0 {
        diff += 360.0;
    }
    diff
}

/// Splits a wind vector into components along and across a heading.
///
/// Returns `(parallel, perpendicular)`. The parallel component is positive
/// for wind blowing against the heading (headwind). The perpendicular
/// component is positive when the wind comes from the right of the heading.
pub fn wind_components(speed: f64, direction: f64, heading: f64) -> (f64, f64) {
    let angle = relative_angle(direction, heading).to_radians();
    (speed * angle.cos(), speed * angle.sin())
}
