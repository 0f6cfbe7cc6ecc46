use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::tools::math::round_to;
use crate::units::METERS_PER_STATUTE_MILE;

/// How the reported value relates to the true visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibilityQualifier {
    Exact,
    /// `M1/4SM`: less than the value.
    LessThan,
    /// `P6SM`: greater than the reported whole number.
    GreaterThan,
}

/// Visibility in statute miles together with its qualifier.
///
/// `value` is the number stored on the weather record. For `GreaterThan` it
/// already carries the +0.1 nudge above the reported whole number, and for
/// `LessThan` it is the bound itself.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisibilityReading {
    pub value: f64,
    pub qualifier: VisibilityQualifier,
}

impl VisibilityReading {
    fn exact(value: f64) -> Self {
        VisibilityReading {
            value,
            qualifier: VisibilityQualifier::Exact,
        }
    }
}

impl fmt::Display for VisibilityReading {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let prefix = match self.qualifier {
            VisibilityQualifier::Exact => "",
            VisibilityQualifier::LessThan => "<",
            VisibilityQualifier::GreaterThan => ">",
        };
        write!(f, "{}{}SM", prefix, self.value)
    }
}

/// Greater-than values are encoded this far above the reported whole number.
const GREATER_THAN_EPSILON: f64 = 0.1;

/// Metric groups at or above this are "10 km or more".
const METRIC_UNLIMITED_METERS: f64 = 9999.0;
const METRIC_UNLIMITED_SM: f64 = 10.0;

struct VisibilityMatcher {
    name: &'static str,
    regex: LazyLock<Regex>,
    read: fn(&Captures) -> Option<VisibilityReading>,
}

fn number(captures: &Captures, index: usize) -> Option<f64> {
    captures.get(index)?.as_str().parse().ok()
}

fn fraction(captures: &Captures, numerator: usize, denominator: usize) -> Option<f64> {
    let denominator = number(captures, denominator)?;
    if denominator == 0.0 {
        return None;
    }
    Some(number(captures, numerator)? / denominator)
}

fn read_mixed_fraction(captures: &Captures) -> Option<VisibilityReading> {
    Some(VisibilityReading::exact(
        number(captures, 1)? + fraction(captures, 2, 3)?,
    ))
}

fn read_less_than_fraction(captures: &Captures) -> Option<VisibilityReading> {
    Some(VisibilityReading {
        value: fraction(captures, 1, 2)?,
        qualifier: VisibilityQualifier::LessThan,
    })
}

fn read_fraction(captures: &Captures) -> Option<VisibilityReading> {
    Some(VisibilityReading::exact(fraction(captures, 1, 2)?))
}

fn read_greater_than(captures: &Captures) -> Option<VisibilityReading> {
    Some(VisibilityReading {
        value: number(captures, 1)? + GREATER_THAN_EPSILON,
        qualifier: VisibilityQualifier::GreaterThan,
    })
}

fn read_whole(captures: &Captures) -> Option<VisibilityReading> {
    Some(VisibilityReading::exact(number(captures, 1)?))
}

fn read_metric(captures: &Captures) -> Option<VisibilityReading> {
    let meters = number(captures, 1)?;
    if meters >= METRIC_UNLIMITED_METERS {
        return Some(VisibilityReading::exact(METRIC_UNLIMITED_SM));
    }
    Some(VisibilityReading::exact(round_to(
        meters / METERS_PER_STATUTE_MILE,
        1,
    )))
}

// Tried in order; the first pattern that matches decides the result.
static VISIBILITY_MATCHERS: [VisibilityMatcher; 6] = [
    VisibilityMatcher {
        name: "mixed fraction",
        regex: LazyLock::new(|| Regex::new(r"\b(\d+) (\d+)/(\d+)SM\b").expect("invalid regex")),
        read: read_mixed_fraction,
    },
    VisibilityMatcher {
        name: "less than fraction",
        regex: LazyLock::new(|| Regex::new(r"\bM(\d+)/(\d+)SM\b").expect("invalid regex")),
        read: read_less_than_fraction,
    },
    VisibilityMatcher {
        name: "fraction",
        regex: LazyLock::new(|| Regex::new(r"\b(\d+)/(\d+)SM\b").expect("invalid regex")),
        read: read_fraction,
    },
    VisibilityMatcher {
        name: "greater than",
        regex: LazyLock::new(|| Regex::new(r"\bP(\d+)SM\b").expect("invalid regex")),
        read: read_greater_than,
    },
    VisibilityMatcher {
        name: "whole",
        regex: LazyLock::new(|| Regex::new(r"\b(\d+)SM\b").expect("invalid regex")),
        read: read_whole,
    },
    VisibilityMatcher {
        name: "metric",
        regex: LazyLock::new(|| Regex::new(r"\b(\d{4})\b").expect("invalid regex")),
        read: read_metric,
    },
];

/// Prevailing visibility in statute miles from normalized text.
pub fn extract_visibility(text: &str) -> Option<f64> {
    extract_visibility_reading(text).map(|reading| reading.value)
}

/// Prevailing visibility with the less-than/greater-than qualifier kept.
///
/// A matched group whose fraction has a zero denominator yields `None`
/// rather than falling through to a later encoding.
pub fn extract_visibility_reading(text: &str) -> Option<VisibilityReading> {
    VISIBILITY_MATCHERS.iter().find_map(|matcher| {
        let captures = matcher.regex.captures(text)?;
        trace!(encoding = matcher.name, group = &captures[0], "matched visibility");
        Some((matcher.read)(&captures))
    })?
}
