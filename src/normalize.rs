use itertools::Itertools;

/// Canonical form every extractor matches against: upper case, with runs of
/// whitespace (including line breaks) collapsed to single spaces.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().map(str::to_uppercase).join(" ")
}
