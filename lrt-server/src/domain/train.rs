//! Upcoming-train model.

use serde::Serialize;

/// One upcoming train at a station, as reported by a single fetch.
///
/// Trains are ephemeral: every fetch builds a fresh list and the previous
/// one is discarded. `train_id` is `{platform_id}_{route_no}` and is only
/// unique within one station's result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Train {
    /// `{platform_id}_{route_no}`, unique within a single station fetch.
    pub train_id: String,

    /// Route number as reported by the API, e.g. "610".
    pub route_number: String,

    /// Localized destination name.
    pub destination: String,

    /// Display-oriented platform label ("Platform 2", "站台 2"). Free-form;
    /// always normalize before comparing platforms.
    pub platform: String,

    /// Localized human ETA label, e.g. "3 mins" or "即將抵達".
    pub eta: String,

    /// Minutes until arrival; 0 means arriving now.
    pub time_to_arrival: u32,

    /// Two coupled cars instead of one.
    pub is_double_car: bool,

    /// Fetch time, formatted in Hong Kong time.
    pub timestamp: String,
}
