//! Conversion from API DTOs to domain trains.

use chrono::{FixedOffset, Utc};

use crate::domain::{Language, Train};

use super::types::ScheduleResponse;

/// Hong Kong is UTC+8 year-round.
const HK_UTC_OFFSET_SECS: i32 = 8 * 3600;

/// Current time in Hong Kong, formatted the way the widgets display it.
pub fn hk_timestamp() -> String {
    let hk = FixedOffset::east_opt(HK_UTC_OFFSET_SECS).expect("UTC+8 is a valid offset");
    Utc::now()
        .with_timezone(&hk)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Parse minutes-to-arrival out of the English ETA label.
///
/// "Arriving" (any case) means the train is here now. Otherwise the label
/// starts with the minute count ("3 mins"); an unparsable label degrades
/// to 0 rather than failing the whole board.
pub fn parse_eta_minutes(time_en: &str) -> u32 {
    let trimmed = time_en.trim();
    if trimmed.eq_ignore_ascii_case("arriving") {
        return 0;
    }
    trimmed
        .split_whitespace()
        .next()
        .and_then(|tok| tok.parse::<u32>().ok())
        .unwrap_or(0)
}

/// Localized platform display label.
fn platform_label(platform_id: i32, lang: Language) -> String {
    match lang {
        Language::En => format!("Platform {platform_id}"),
        Language::Zh => format!("站台 {platform_id}"),
    }
}

/// Flatten a normal (`status == 1`) payload into trains, sorted ascending
/// by minutes to arrival.
///
/// One train is built per `(platform_id, route_no)` entry. Localized
/// fields fall back to the other language when one side is missing.
pub fn convert_schedule(resp: &ScheduleResponse, lang: Language, timestamp: &str) -> Vec<Train> {
    let mut trains = Vec::new();

    let Some(platforms) = &resp.platform_list else {
        return trains;
    };

    for platform in platforms {
        let Some(routes) = &platform.route_list else {
            continue;
        };

        for entry in routes {
            let time_en = entry.time_en.as_deref().unwrap_or("");
            let time_ch = entry.time_ch.as_deref().unwrap_or(time_en);

            let (destination, eta) = match lang {
                Language::En => (
                    entry
                        .dest_en
                        .as_deref()
                        .or(entry.dest_ch.as_deref())
                        .unwrap_or(""),
                    time_en,
                ),
                Language::Zh => (
                    entry
                        .dest_ch
                        .as_deref()
                        .or(entry.dest_en.as_deref())
                        .unwrap_or(""),
                    time_ch,
                ),
            };

            trains.push(Train {
                train_id: format!("{}_{}", platform.platform_id, entry.route_no),
                route_number: entry.route_no.clone(),
                destination: destination.to_string(),
                platform: platform_label(platform.platform_id, lang),
                eta: eta.to_string(),
                time_to_arrival: parse_eta_minutes(time_en),
                is_double_car: entry.train_length == Some(2),
                timestamp: timestamp.to_string(),
            });
        }
    }

    trains.sort_by_key(|t| t.time_to_arrival);
    trains
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// A label starting with a number parses to that number.
        #[test]
        fn leading_number_wins(n in 0u32..1000, suffix in " (min|mins|分鐘)") {
            let label = format!("{n}{suffix}");
            prop_assert_eq!(parse_eta_minutes(&label), n);
        }

        /// Parsing never panics on arbitrary input.
        #[test]
        fn total_on_arbitrary_input(s in ".*") {
            let _ = parse_eta_minutes(&s);
        }
    }
}
