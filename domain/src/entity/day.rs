//! Day-of-week mentions.

use crate::calendar::{DayCode, DaySet};
use regex::Regex;
use std::sync::LazyLock;

/// Day lexicon: alias → day code. Full names are listed before their
/// abbreviations so the alternation prefers the longest alias.
const DAY_LEXICON: &[(&str, DayCode)] = &[
    ("sunday", 0),
    ("monday", 1),
    ("tuesday", 2),
    ("wednesday", 3),
    ("thursday", 4),
    ("friday", 5),
    ("saturday", 6),
    ("thurs", 4),
    ("tues", 2),
    ("thur", 4),
    ("sun", 0),
    ("mon", 1),
    ("tue", 2),
    ("wed", 3),
    ("thu", 4),
    ("fri", 5),
    ("sat", 6),
];

static DAY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = DAY_LEXICON
        .iter()
        .map(|(alias, _)| *alias)
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))
        .expect("day lexicon forms a valid pattern")
});

/// Collect the day codes of every day name or abbreviation in `text`.
pub fn extract_days(text: &str) -> DaySet {
    DAY_PATTERN
        .find_iter(text)
        .filter_map(|m| lookup(m.as_str()))
        .collect()
}

fn lookup(alias: &str) -> Option<DayCode> {
    let alias = alias.to_lowercase();
    DAY_LEXICON
        .iter()
        .find(|(candidate, _)| *candidate == alias)
        .map(|(_, code)| *code)
}
