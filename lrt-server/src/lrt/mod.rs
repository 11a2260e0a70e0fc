//! Light Rail next-train API client.
//!
//! This module wraps the public real-time schedule endpoint
//! (`GET {base}?station_id={id}`). Key characteristics of the API:
//! - No authentication and no documented rate limit; clients poll ~30 s.
//! - A payload `status` of 1 is a normal board, 0 is a valid-but-empty
//!   board (no trains right now), anything else is an error.
//! - ETA labels are free-form text ("Arriving", "3 mins") carried in both
//!   English and Chinese; minutes are parsed out of the English label.

mod client;
mod convert;
mod error;
mod fetch;
mod mock;
mod types;

pub use client::{LrtClient, LrtConfig, ScheduleSource};
pub use convert::{convert_schedule, hk_timestamp, parse_eta_minutes};
pub use error::LrtError;
pub use fetch::fetch_station_schedule;
pub use mock::MockLrtClient;
pub use types::{PlatformEntry, RouteEntry, ScheduleResponse};
