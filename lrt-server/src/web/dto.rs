//! Request and response DTOs for the JSON API.

use serde::{Deserialize, Serialize};

use crate::domain::{Language, Route, Station};

/// Query parameters carrying only a display language.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LangQuery {
    /// Display language, `en` (default) or `zh`.
    #[serde(default)]
    pub lang: Language,
}

/// Query parameters for the route-mode board.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RouteBoardQuery {
    /// Travel against the catalog's station order.
    #[serde(default)]
    pub reversed: bool,

    /// Display language, `en` (default) or `zh`.
    #[serde(default)]
    pub lang: Language,
}

/// Response to the station catalog endpoint.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub stations: Vec<Station>,
}

/// One route in the route catalog response.
#[derive(Debug, Serialize)]
pub struct RouteSummary {
    pub route_number: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub is_circular: bool,
    pub station_ids: &'static [&'static str],
}

impl RouteSummary {
    pub fn from_route(route: &Route, lang: Language) -> Self {
        Self {
            route_number: route.route_number,
            start: route.start_name(lang),
            end: route.end_name(lang),
            is_circular: route.is_circular,
            station_ids: route.stations,
        }
    }
}

/// Response to the route catalog endpoint.
#[derive(Debug, Serialize)]
pub struct RouteListResponse {
    pub routes: Vec<RouteSummary>,
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
