//! Upstream API response DTOs.
//!
//! These map directly to the next-train JSON payload. `Option` is used
//! liberally: the API omits `platform_list` entirely on empty boards and
//! has been observed dropping individual fields.

use serde::{Deserialize, Serialize};

/// Response from `getSchedule?station_id={id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// 1 = normal board, 0 = valid but empty, anything else = error.
    pub status: i32,

    /// Server-side generation time, e.g. "2024-03-15 10:30:00".
    pub system_time: Option<String>,

    /// Platforms at this station, each with its upcoming trains.
    pub platform_list: Option<Vec<PlatformEntry>>,
}

/// One physical platform and its upcoming trains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformEntry {
    /// Platform number (1-4 on this network).
    pub platform_id: i32,

    /// Upcoming trains on this platform, nearest first.
    pub route_list: Option<Vec<RouteEntry>>,
}

/// One upcoming train on a platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Route number, e.g. "610" or "614P".
    pub route_no: String,

    /// English destination name.
    pub dest_en: Option<String>,

    /// Chinese destination name.
    pub dest_ch: Option<String>,

    /// English ETA label ("Arriving", "3 mins").
    pub time_en: Option<String>,

    /// Chinese ETA label ("即將抵達", "3 分鐘").
    pub time_ch: Option<String>,

    /// Number of coupled cars (1 or 2).
    pub train_length: Option<i32>,

    /// Whether the train stops at this station.
    pub stop: Option<i32>,

    /// "A" for arrival, "D" for departure.
    pub arrival_departure: Option<String>,
}
