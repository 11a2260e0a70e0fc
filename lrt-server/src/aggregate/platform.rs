//! Platform label normalization, grouping and filtering.
//!
//! Platform labels on trains are free-form: depending on which client (or
//! locale) produced them they read "2", "Platform 2" or "站台 2". All
//! comparisons go through `normalize_platform` first.

use std::collections::BTreeMap;

use crate::domain::Train;

/// Platform numbers that exist on this network.
const PLATFORM_DIGITS: [char; 4] = ['1', '2', '3', '4'];

/// Reduce a display label to a bare platform number.
///
/// Returns the first of "1".."4" found anywhere in the label; labels with
/// no platform digit come back trimmed but otherwise untouched.
pub fn normalize_platform(raw: &str) -> String {
    raw.chars()
        .find(|c| PLATFORM_DIGITS.contains(c))
        .map(String::from)
        .unwrap_or_else(|| raw.trim().to_string())
}

/// Group trains by normalized platform, each group sorted ascending by
/// minutes to arrival.
pub fn group_by_platform(trains: &[Train]) -> BTreeMap<String, Vec<Train>> {
    let mut groups: BTreeMap<String, Vec<Train>> = BTreeMap::new();

    for train in trains {
        groups
            .entry(normalize_platform(&train.platform))
            .or_default()
            .push(train.clone());
    }

    for group in groups.values_mut() {
        group.sort_by_key(|t| t.time_to_arrival);
    }

    groups
}

/// Trains whose normalized platform matches `platform_number`.
///
/// Bus-mode exemption: feeder-bus data has no platform concept, so when
/// every train in the input carries an empty platform label the list is
/// returned unfiltered.
pub fn filter_trains_by_platform(trains: &[Train], platform_number: &str) -> Vec<Train> {
    if !trains.is_empty() && trains.iter().all(|t| t.platform.is_empty()) {
        return trains.to_vec();
    }

    let target = normalize_platform(platform_number);
    trains
        .iter()
        .filter(|t| normalize_platform(&t.platform) == target)
        .cloned()
        .collect()
}
