//! Core domain types: identifiers, stations, routes and trains.

mod language;
mod route;
mod station;
mod train;

pub use language::Language;
pub use route::{InvalidRouteNumber, Route, RouteNumber};
pub use station::{InvalidStationId, Station, StationId};
pub use train::Train;
