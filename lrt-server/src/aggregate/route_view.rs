//! Route-mode view assembly.
//!
//! Given a route and direction, fetch every station along it and reduce
//! each board to the trains that direction actually shows. Output order is
//! always the resolved catalog order, never fetch-completion order.

use futures::future::join_all;
use serde::Serialize;
use tracing::warn;

use crate::cache::CachedLrtClient;
use crate::catalog;
use crate::domain::{Language, RouteNumber, Station, StationId, Train};
use crate::lrt::ScheduleSource;

use super::error::AggregateError;
use super::policy::PolicyTable;

/// Load state of an assembled route view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteViewStatus {
    /// Every station along the route loaded.
    Loaded,
    /// Some stations loaded, some failed; boards cover the loaded subset.
    PartiallyLoaded,
    /// No station loaded.
    Failed,
}

/// One station along the route with its direction-filtered trains.
#[derive(Debug, Clone, Serialize)]
pub struct StationBoard {
    pub station: Station,
    /// Trains this direction shows, after the platform merge policy.
    pub trains: Vec<Train>,
}

/// A route-direction view over live boards.
#[derive(Debug, Clone, Serialize)]
pub struct RouteView {
    pub route_number: RouteNumber,
    pub reversed: bool,
    pub status: RouteViewStatus,

    /// Boards in resolved station order (failed stations excluded).
    pub boards: Vec<StationBoard>,

    /// Station ids that failed to load, in resolved order.
    pub failed: Vec<StationId>,
}

/// Assemble the route-mode view for a route and direction.
///
/// Stations are fetched concurrently through the cache; per-station
/// failures degrade the view to `PartiallyLoaded` (or `Failed` when
/// nothing loads) rather than erroring, and the failed ids are reported so
/// callers can render them as unavailable.
pub async fn assemble_route_view<S: ScheduleSource>(
    client: &CachedLrtClient<S>,
    policies: &PolicyTable,
    route_number: &RouteNumber,
    reversed: bool,
    lang: Language,
) -> Result<RouteView, AggregateError> {
    if catalog::route(route_number).is_none() {
        return Err(AggregateError::UnknownRoute(*route_number));
    }

    let ids = catalog::route_stations_for_direction(route_number, reversed);

    let results = join_all(
        ids.iter()
            .map(|id| async move { (*id, client.station(id, lang).await) }),
    )
    .await;

    let mut boards = Vec::with_capacity(ids.len());
    let mut failed = Vec::new();

    for (id, result) in results {
        match result {
            Ok(station) => {
                let trains = policies.apply(&station.station_name, &station.next_trains, reversed);
                boards.push(StationBoard {
                    station: (*station).clone(),
                    trains,
                });
            }
            Err(e) => {
                warn!(station = %id, route = %route_number, error = %e, "route view station failed");
                failed.push(id);
            }
        }
    }

    let status = if failed.is_empty() {
        RouteViewStatus::Loaded
    } else if boards.is_empty() {
        RouteViewStatus::Failed
    } else {
        RouteViewStatus::PartiallyLoaded
    };

    Ok(RouteView {
        route_number: *route_number,
        reversed,
        status,
        boards,
        failed,
    })
}
