//! Static route table and direction resolution.

use crate::domain::{Route, RouteNumber, StationId};

/// Shan King spur station ids, skipped by route 505 in the reverse
/// direction (Siu Hong towards Sam Shing).
const SHAN_KING_SOUTH: &str = "190";
const SHAN_KING_NORTH: &str = "180";

/// All 11 light-rail routes.
pub const ROUTES: &[Route] = &[
    Route {
        route_number: "505",
        stations: &[
            "920", "265", "270", "280", "295", "60", "190", "180", "200", "170", "160", "150",
            "140", "130", "120", "110", "100",
        ],
        start_en: "Sam Shing",
        start_zh: "三聖",
        end_en: "Siu Hong",
        end_zh: "兆康",
        is_circular: false,
    },
    Route {
        route_number: "507",
        stations: &[
            "1", "240", "250", "260", "270", "280", "295", "70", "75", "230", "220", "212", "160",
            "150", "140",
        ],
        start_en: "Tuen Mun Ferry Pier",
        start_zh: "屯門碼頭",
        end_en: "Tin King",
        end_zh: "田景",
        is_circular: false,
    },
    Route {
        route_number: "610",
        stations: &[
            "1", "10", "15", "20", "30", "40", "50", "200", "170", "212", "220", "230", "80", "90",
            "100", "350", "360", "370", "380", "390", "400", "560", "570", "580", "590", "600",
        ],
        start_en: "Tuen Mun Ferry Pier",
        start_zh: "屯門碼頭",
        end_en: "Yuen Long",
        end_zh: "元朗",
        is_circular: false,
    },
    Route {
        route_number: "614",
        stations: &[
            "1", "240", "250", "260", "270", "280", "300", "310", "320", "330", "340", "100",
            "350", "360", "370", "380", "390", "400", "560", "570", "580", "590", "600",
        ],
        start_en: "Tuen Mun Ferry Pier",
        start_zh: "屯門碼頭",
        end_en: "Yuen Long",
        end_zh: "元朗",
        is_circular: false,
    },
    Route {
        route_number: "614P",
        stations: &[
            "1", "240", "250", "260", "270", "280", "300", "310", "320", "330", "340", "100",
        ],
        start_en: "Tuen Mun Ferry Pier",
        start_zh: "屯門碼頭",
        end_en: "Siu Hong",
        end_zh: "兆康",
        is_circular: false,
    },
    Route {
        route_number: "615",
        stations: &[
            "1", "10", "15", "20", "30", "40", "50", "200", "170", "160", "150", "140", "130",
            "120", "110", "100", "350", "360", "370", "380", "390", "400", "560", "570", "580",
            "590", "600",
        ],
        start_en: "Tuen Mun Ferry Pier",
        start_zh: "屯門碼頭",
        end_en: "Yuen Long",
        end_zh: "元朗",
        is_circular: false,
    },
    Route {
        route_number: "615P",
        stations: &[
            "1", "10", "15", "20", "30", "40", "50", "200", "170", "160", "150", "140", "130",
            "120", "110", "100",
        ],
        start_en: "Tuen Mun Ferry Pier",
        start_zh: "屯門碼頭",
        end_en: "Siu Hong",
        end_zh: "兆康",
        is_circular: false,
    },
    Route {
        route_number: "705",
        stations: &[
            "430", "435", "450", "455", "500", "490", "468", "480", "550", "540", "530", "520",
            "510", "460", "448", "445", "430",
        ],
        start_en: "Tin Shui Wai (anticlockwise)",
        start_zh: "天水圍 (逆時針)",
        end_en: "Tin Shui Wai (anticlockwise)",
        end_zh: "天水圍 (逆時針)",
        is_circular: true,
    },
    Route {
        route_number: "706",
        stations: &[
            "430", "445", "448", "460", "510", "520", "530", "540", "550", "480", "468", "490",
            "500", "455", "450", "435", "430",
        ],
        start_en: "Tin Shui Wai (clockwise)",
        start_zh: "天水圍 (順時針)",
        end_en: "Tin Shui Wai (clockwise)",
        end_zh: "天水圍 (順時針)",
        is_circular: true,
    },
    Route {
        route_number: "751",
        stations: &[
            "275", "270", "280", "295", "70", "75", "80", "90", "100", "350", "360", "370", "380",
            "425", "430", "435", "450", "455", "500", "490", "468", "480", "550",
        ],
        start_en: "Yau Oi",
        start_zh: "友愛",
        end_en: "Tin Yat",
        end_zh: "天逸",
        is_circular: false,
    },
    Route {
        route_number: "761P",
        stations: &[
            "600", "590", "580", "570", "560", "400", "390", "425", "430", "445", "448", "460",
            "490", "468", "480", "550",
        ],
        start_en: "Yuen Long",
        start_zh: "元朗",
        end_en: "Tin Yat",
        end_zh: "天逸",
        is_circular: false,
    },
];

/// All routes, in catalog order.
pub fn all_routes() -> &'static [Route] {
    ROUTES
}

/// Look up a route by number.
pub fn route(route_number: &RouteNumber) -> Option<&'static Route> {
    ROUTES
        .iter()
        .find(|r| r.route_number == route_number.as_str())
}

/// Ordered station ids for a route in the requested direction.
///
/// Forward is the stored sequence verbatim; reverse is its literal
/// reversal. Route 505 is the one documented exception: the reverse run
/// does not serve the Shan King spur, so ids 190 and 180 are removed
/// before reversing. Unknown routes yield an empty list.
pub fn route_stations_for_direction(route_number: &RouteNumber, reversed: bool) -> Vec<StationId> {
    let Some(route) = route(route_number) else {
        return Vec::new();
    };

    let ids = route
        .stations
        .iter()
        .filter(|id| {
            !(reversed
                && route.route_number == "505"
                && (**id == SHAN_KING_SOUTH || **id == SHAN_KING_NORTH))
        })
        .filter_map(|id| StationId::parse(id).ok());

    if reversed {
        let mut out: Vec<StationId> = ids.collect();
        out.reverse();
        out
    } else {
        ids.collect()
    }
}
