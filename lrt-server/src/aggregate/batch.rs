//! Fan-out/fan-in batch fetching with partial-success semantics.

use futures::future::join_all;
use tracing::warn;

use crate::domain::{Language, Station, StationId};
use crate::lrt::{ScheduleSource, fetch_station_schedule};

use super::error::AggregateError;

/// Result of a batch fetch: the stations that loaded, plus the ids that
/// did not.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Successfully fetched stations, in input-id order.
    pub stations: Vec<Station>,

    /// Ids whose fetch failed, in input-id order.
    pub failed: Vec<StationId>,
}

impl BatchOutcome {
    /// Whether every requested id loaded.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Fetch schedules for several stations concurrently.
///
/// Per-station failures are swallowed: they are logged, recorded in
/// `failed`, and excluded from `stations`. The call errors only when every
/// id fails (`AllFetchesFailed`). An empty id list yields an empty outcome.
///
/// Each fetch produces an independent `Station`; nothing is shared during
/// the parallel phase, results are only merged after the join point.
pub async fn fetch_many<S: ScheduleSource>(
    source: &S,
    ids: &[StationId],
    lang: Language,
) -> Result<BatchOutcome, AggregateError> {
    let results = join_all(
        ids.iter()
            .map(|id| async move { (*id, fetch_station_schedule(source, id, lang).await) }),
    )
    .await;

    let mut outcome = BatchOutcome::default();
    for (id, result) in results {
        match result {
            Ok(station) => outcome.stations.push(station),
            Err(e) => {
                warn!(station = %id, error = %e, "station fetch failed, dropping from batch");
                outcome.failed.push(id);
            }
        }
    }

    if outcome.stations.is_empty() && !ids.is_empty() {
        return Err(AggregateError::AllFetchesFailed {
            failed: outcome.failed,
        });
    }

    Ok(outcome)
}
