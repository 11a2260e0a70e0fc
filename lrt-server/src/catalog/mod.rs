//! Static station and route catalog.
//!
//! The light-rail network topology is fixed: 68 stations and 11 routes.
//! Loaded once at process start, immutable thereafter. Lookups for unknown
//! ids yield `None` or an empty list, never an error.

mod routes;
mod stations;

pub use routes::{all_routes, route, route_stations_for_direction};
pub use stations::{StationInfo, all_stations, station_by_id, station_info};
