use std::sync::LazyLock;

use regex::Regex;

static CEILING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:BKN|OVC|VV)(\d{3})").expect("invalid ceiling regex"));

/// Lowest broken, overcast or vertical visibility layer in feet AGL.
///
/// Every layer in the text is considered; the order they appear in does not matter.
pub fn extract_ceiling(text: &str) -> Option<u32> {
    CEILING_REGEX
        .captures_iter(text)
        .filter_map(|c| c[1].parse::<u32>().ok())
        .map(|hundreds| hundreds * 100)
        .min()
}
