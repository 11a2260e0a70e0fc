//! Single-station schedule fetch.

use tracing::debug;

use crate::catalog;
use crate::domain::{Language, Station, StationId};

use super::client::ScheduleSource;
use super::convert::{convert_schedule, hk_timestamp};
use super::error::LrtError;

/// Fetch and normalize the schedule for one station.
///
/// The id must be in the catalog (`UnknownStation` otherwise). A payload
/// `status` of 0 is a valid empty board, not an error; any status other
/// than 0 or 1 is an `Api` error. Returned trains are sorted ascending by
/// minutes to arrival.
///
/// Failures always propagate to the caller; swallowing them is the batch
/// layer's business, not this one's.
pub async fn fetch_station_schedule<S: ScheduleSource>(
    source: &S,
    id: &StationId,
    lang: Language,
) -> Result<Station, LrtError> {
    let mut station =
        catalog::station_by_id(id, lang).ok_or_else(|| LrtError::UnknownStation(*id))?;

    let resp = source.get_schedule(id).await?;

    match resp.status {
        // Valid but empty board (e.g. overnight)
        0 => {
            debug!(station = %id, "empty board (status 0)");
            Ok(station)
        }
        1 => {
            let timestamp = hk_timestamp();
            station.next_trains = convert_schedule(&resp, lang, &timestamp);
            debug!(station = %id, trains = station.next_trains.len(), "board fetched");
            Ok(station)
        }
        other => Err(LrtError::Api {
            status: other,
            message: format!("unexpected payload status {other}"),
        }),
    }
}
