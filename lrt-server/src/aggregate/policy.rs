//! Per-station platform merge policies for route-mode views.
//!
//! Route mode shows one platform per station: platform 1 going forward,
//! platform 2 going back. A handful of stations break that 1:1 mapping —
//! a terminus boards from every platform, Tin King funnels reverse-bound
//! trains over platforms 2 and 3, Town Centre has no platform 2 at all and
//! uses 4 instead. The exceptions live here as data so that new stations
//! are a table entry, not a code change.

use serde::{Deserialize, Serialize};

use crate::domain::Train;

use super::platform::filter_trains_by_platform;

/// Platform the generic route-mode view shows for a direction.
pub fn direction_platform(reversed: bool) -> &'static str {
    if reversed { "2" } else { "1" }
}

/// How a station's platforms map onto a route-mode direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformMergePolicy {
    /// Show every platform regardless of direction (termini).
    AllPlatforms,

    /// Show a different platform set per direction, merged together.
    MergeOnDirection {
        forward: Vec<String>,
        reverse: Vec<String>,
    },

    /// Show exactly one remapped platform per direction.
    RemapOnDirection { forward: String, reverse: String },
}

/// One policy entry: name patterns it applies to, and the policy.
///
/// Patterns are matched case-insensitively as substrings of the station's
/// display name, so one entry covers every locale variant of a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationPolicy {
    pub name_patterns: Vec<String>,
    pub policy: PlatformMergePolicy,
}

impl StationPolicy {
    fn matches(&self, station_name: &str) -> bool {
        let name = station_name.to_lowercase();
        self.name_patterns
            .iter()
            .any(|p| name.contains(&p.to_lowercase()))
    }
}

/// Ordered lookup table of station policies; first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyTable {
    entries: Vec<StationPolicy>,
}

impl PolicyTable {
    /// Build a table from explicit entries.
    pub fn new(entries: Vec<StationPolicy>) -> Self {
        Self { entries }
    }

    /// The policy for a station name, if any entry matches.
    pub fn policy_for(&self, station_name: &str) -> Option<&PlatformMergePolicy> {
        self.entries
            .iter()
            .find(|e| e.matches(station_name))
            .map(|e| &e.policy)
    }

    /// Trains a route-mode view shows for this station and direction,
    /// sorted ascending by minutes to arrival.
    ///
    /// Stations without a policy entry get the generic mapping: platform 1
    /// forward, platform 2 reverse.
    pub fn apply(&self, station_name: &str, trains: &[Train], reversed: bool) -> Vec<Train> {
        let mut shown = match self.policy_for(station_name) {
            Some(PlatformMergePolicy::AllPlatforms) => trains.to_vec(),
            Some(PlatformMergePolicy::MergeOnDirection { forward, reverse }) => {
                let platforms = if reversed { reverse } else { forward };
                platforms
                    .iter()
                    .flat_map(|p| filter_trains_by_platform(trains, p))
                    .collect()
            }
            Some(PlatformMergePolicy::RemapOnDirection { forward, reverse }) => {
                let platform = if reversed { reverse } else { forward };
                filter_trains_by_platform(trains, platform)
            }
            None => filter_trains_by_platform(trains, direction_platform(reversed)),
        };

        shown.sort_by_key(|t| t.time_to_arrival);
        shown
    }
}

impl Default for PolicyTable {
    /// The observed network exceptions.
    fn default() -> Self {
        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Self::new(vec![
            // Termini: every platform, both directions
            StationPolicy {
                name_patterns: strings(&[
                    "屯門碼頭",
                    "屯门码头",
                    "Tuen Mun Ferry Pier",
                    "三聖",
                    "三圣",
                    "Sam Shing",
                ]),
                policy: PlatformMergePolicy::AllPlatforms,
            },
            // Tin King: reverse direction boards from platforms 2 and 3
            StationPolicy {
                name_patterns: strings(&["田景", "Tin King"]),
                policy: PlatformMergePolicy::MergeOnDirection {
                    forward: strings(&["1"]),
                    reverse: strings(&["2", "3"]),
                },
            },
            // Town Centre: platforms are 1 and 4, there is no 2
            StationPolicy {
                name_patterns: strings(&["市中心", "Town Centre"]),
                policy: PlatformMergePolicy::RemapOnDirection {
                    forward: "1".to_string(),
                    reverse: "4".to_string(),
                },
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn train(platform: &str, minutes: u32) -> Train {
        Train {
            train_id: format!("{platform}_505"),
            route_number: "505".to_string(),
            destination: "Siu Hong".to_string(),
            platform: platform.to_string(),
            eta: format!("{minutes} mins"),
            time_to_arrival: minutes,
            is_double_car: false,
            timestamp: "2024-03-15 10:30:00".to_string(),
        }
    }

    #[test]
    fn generic_station_filters_by_direction() {
        let table = PolicyTable::default();
        let trains = vec![train("1", 2), train("2", 4), train("3", 6)];

        let forward = table.apply("Siu Hong", &trains, false);
        assert_eq!(forward.len(), 1);
        assert_eq!(forward[0].platform, "1");

        let reverse = table.apply("Siu Hong", &trains, true);
        assert_eq!(reverse.len(), 1);
        assert_eq!(reverse[0].platform, "2");
    }

    #[test]
    fn terminus_shows_all_platforms_either_direction() {
        let table = PolicyTable::default();
        let trains = vec![train("2", 9), train("1", 3), train("3", 6)];

        for reversed in [false, true] {
            let shown = table.apply("Tuen Mun Ferry Pier", &trains, reversed);
            assert_eq!(shown.len(), 3);
            let minutes: Vec<u32> = shown.iter().map(|t| t.time_to_arrival).collect();
            assert_eq!(minutes, vec![3, 6, 9]);
        }

        // Localized names match the same entry
        assert_eq!(table.apply("三聖", &trains, false).len(), 3);
    }

    #[test]
    fn tin_king_merges_platforms_2_and_3_in_reverse() {
        let table = PolicyTable::default();
        let trains = vec![
            train("1", 1),
            train("2", 8),
            train("3", 4),
            train("Platform 2", 2),
        ];

        let forward = table.apply("Tin King", &trains, false);
        assert_eq!(forward.len(), 1);
        assert_eq!(forward[0].platform, "1");

        let reverse = table.apply("田景", &trains, true);
        let minutes: Vec<u32> = reverse.iter().map(|t| t.time_to_arrival).collect();
        assert_eq!(minutes, vec![2, 4, 8]);
    }

    #[test]
    fn town_centre_remaps_reverse_to_platform_4() {
        let table = PolicyTable::default();
        let trains = vec![train("1", 5), train("4", 2)];

        let forward = table.apply("Town Centre", &trains, false);
        assert_eq!(forward.len(), 1);
        assert_eq!(forward[0].platform, "1");

        let reverse = table.apply("市中心", &trains, true);
        assert_eq!(reverse.len(), 1);
        assert_eq!(reverse[0].platform, "4");
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let table = PolicyTable::default();
        assert!(table.policy_for("tuen mun ferry pier").is_some());
        assert!(table.policy_for("Tin King (田景)").is_some());
        assert!(table.policy_for("Tuen Mun").is_none()); // not Ferry Pier
    }

    #[test]
    fn custom_entries_extend_without_code_changes() {
        let extra = StationPolicy {
            name_patterns: vec!["Yuen Long".to_string()],
            policy: PlatformMergePolicy::AllPlatforms,
        };
        let mut entries = vec![extra];
        entries.extend(PolicyTable::default().entries);
        let table = PolicyTable::new(entries);

        let trains = vec![train("1", 1), train("2", 2)];
        assert_eq!(table.apply("Yuen Long", &trains, true).len(), 2);
    }

    #[test]
    fn table_serde_roundtrip() {
        let table = PolicyTable::default();
        let json = serde_json::to_string(&table).unwrap();
        let back: PolicyTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
