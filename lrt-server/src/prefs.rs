//! User preference values and the station ordering helpers built on them.
//!
//! The core does not own any storage. `Preferences` is a plain value the
//! caller persists however it likes (shared prefs, local storage, a JSON
//! file); the helpers here are pure transforms over it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::{Language, Station, StationId};

/// Where the home-screen widget takes its station from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetStationSource {
    /// Follow the app's default station.
    #[default]
    Default,
    /// A station picked just for the widget.
    Custom,
}

/// Persisted user preferences, as a plain value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Station shown first on launch.
    pub default_station: Option<StationId>,

    /// Explicit display order; stations not listed here sort after those
    /// that are.
    pub station_order: Vec<StationId>,

    /// Stations the user has ever moved to the top.
    pub topped: BTreeSet<StationId>,

    /// Display language.
    pub language: Language,

    /// Widget station selection.
    pub widget_source: WidgetStationSource,

    /// Widget station when `widget_source` is `Custom`.
    pub widget_station: Option<StationId>,
}

impl Preferences {
    /// Station the widget should show, resolving the source setting.
    pub fn widget_station_id(&self) -> Option<StationId> {
        match self.widget_source {
            WidgetStationSource::Default => self.default_station,
            WidgetStationSource::Custom => self.widget_station.or(self.default_station),
        }
    }

    /// Whether the user has ever topped this station.
    pub fn is_topped(&self, id: &StationId) -> bool {
        self.topped.contains(id)
    }

    /// Forget all topped-station records.
    pub fn clear_topped(&mut self) {
        self.topped.clear();
    }

    /// Forget the saved display order.
    pub fn clear_station_order(&mut self) {
        self.station_order.clear();
    }
}

/// Sort stations by a saved order.
///
/// Stations named in `order` come first, in that order; everything else
/// follows in its original relative order. With an empty saved order the
/// input is returned unchanged. Applying the result's own order again is a
/// no-op, so the transform is idempotent.
pub fn sort_stations_by_order(stations: Vec<Station>, order: &[StationId]) -> Vec<Station> {
    if order.is_empty() {
        return stations;
    }

    let mut remaining: Vec<Option<Station>> = stations.into_iter().map(Some).collect();
    let mut sorted = Vec::with_capacity(remaining.len());

    for id in order {
        if let Some(slot) = remaining
            .iter_mut()
            .find(|s| s.as_ref().is_some_and(|s| &s.station_id == id))
        {
            sorted.extend(slot.take());
        }
    }

    sorted.extend(remaining.into_iter().flatten());
    sorted
}

/// Move a station to the front of the list and record the new order.
///
/// The relative order of all other stations is preserved. The new full
/// order is written back to `prefs.station_order` and the station is
/// remembered as topped. A station id not present in the list leaves both
/// the list and the preferences untouched.
pub fn top_station_and_save_order(
    stations: Vec<Station>,
    id: &StationId,
    prefs: &mut Preferences,
) -> Vec<Station> {
    let mut stations = stations;

    let Some(index) = stations.iter().position(|s| &s.station_id == id) else {
        return stations;
    };

    let station = stations.remove(index);
    stations.insert(0, station);

    prefs.station_order = stations.iter().map(|s| s.station_id).collect();
    prefs.topped.insert(*id);

    stations
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn station(id: u32) -> Station {
        let id = StationId::parse(&id.to_string()).unwrap();
        Station {
            station_id: id,
            station_code: id.as_str().to_string(),
            station_name: format!("Station {id}"),
            next_trains: Vec::new(),
            is_pinned: false,
        }
    }

    fn unique_ids() -> impl Strategy<Value = Vec<u32>> {
        proptest::collection::btree_set(0u32..=999, 0..12)
            .prop_map(|set| set.into_iter().collect())
    }

    proptest! {
        /// Sorting twice with the same order equals sorting once.
        #[test]
        fn sort_idempotent(station_ids in unique_ids(), order_ids in unique_ids()) {
            let stations: Vec<Station> = station_ids.iter().map(|&n| station(n)).collect();
            let order: Vec<StationId> = order_ids
                .iter()
                .map(|n| StationId::parse(&n.to_string()).unwrap())
                .collect();

            let once = sort_stations_by_order(stations, &order);
            let twice = sort_stations_by_order(once.clone(), &order);
            prop_assert_eq!(once, twice);
        }

        /// Sorting is a permutation: nothing is lost or invented.
        #[test]
        fn sort_preserves_elements(station_ids in unique_ids(), order_ids in unique_ids()) {
            let stations: Vec<Station> = station_ids.iter().map(|&n| station(n)).collect();
            let order: Vec<StationId> = order_ids
                .iter()
                .map(|n| StationId::parse(&n.to_string()).unwrap())
                .collect();

            let sorted = sort_stations_by_order(stations.clone(), &order);
            let mut before: Vec<&str> = stations.iter().map(|s| s.station_id.as_str()).collect();
            let mut after: Vec<&str> = sorted.iter().map(|s| s.station_id.as_str()).collect();
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);
        }

        /// Topping preserves the relative order of everything else.
        #[test]
        fn top_preserves_relative_order(station_ids in unique_ids(), pick in 0usize..12) {
            prop_assume!(!station_ids.is_empty());
            let stations: Vec<Station> = station_ids.iter().map(|&n| station(n)).collect();
            let target = stations[pick % stations.len()].station_id;

            let mut prefs = Preferences::default();
            let topped = top_station_and_save_order(stations.clone(), &target, &mut prefs);

            prop_assert_eq!(topped[0].station_id, target);

            let rest_before: Vec<StationId> = stations
                .iter()
                .map(|s| s.station_id)
                .filter(|id| id != &target)
                .collect();
            let rest_after: Vec<StationId> = topped[1..].iter().map(|s| s.station_id).collect();
            prop_assert_eq!(rest_before, rest_after);
        }
    }
}
