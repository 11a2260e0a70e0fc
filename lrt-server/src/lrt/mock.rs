//! Mock schedule source for tests and offline development.
//!
//! Serves canned board payloads from an in-memory map or from a directory
//! of `{station_id}.json` files, as if they came from the live endpoint.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::StationId;

use super::client::ScheduleSource;
use super::error::LrtError;
use super::types::ScheduleResponse;

/// Mock client serving pre-loaded boards keyed by station id.
#[derive(Clone)]
pub struct MockLrtClient {
    boards: Arc<RwLock<HashMap<StationId, ScheduleResponse>>>,
}

impl MockLrtClient {
    /// Build a mock from in-memory boards.
    pub fn from_boards(boards: impl IntoIterator<Item = (StationId, ScheduleResponse)>) -> Self {
        Self {
            boards: Arc::new(RwLock::new(boards.into_iter().collect())),
        }
    }

    /// Load boards from a directory of `{station_id}.json` files.
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, LrtError> {
        let data_dir = data_dir.as_ref();
        let mut boards = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| LrtError::Api {
            status: 0,
            message: format!("failed to read mock data directory: {e}"),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| LrtError::Api {
                status: 0,
                message: format!("failed to read directory entry: {e}"),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            // "280.json" -> station 280
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| LrtError::Api {
                    status: 0,
                    message: format!("invalid filename: {path:?}"),
                })?;

            let id = StationId::parse(stem).map_err(|_| LrtError::Api {
                status: 0,
                message: format!("invalid station id in filename: {stem}"),
            })?;

            let json = std::fs::read_to_string(&path).map_err(|e| LrtError::Api {
                status: 0,
                message: format!("failed to read {path:?}: {e}"),
            })?;

            let board: ScheduleResponse =
                serde_json::from_str(&json).map_err(|e| LrtError::Json {
                    message: format!("failed to parse {path:?}: {e}"),
                    body: None,
                })?;

            boards.insert(id, board);
        }

        if boards.is_empty() {
            return Err(LrtError::Api {
                status: 0,
                message: format!("no mock board files found in {data_dir:?}"),
            });
        }

        Ok(Self {
            boards: Arc::new(RwLock::new(boards)),
        })
    }

    /// Replace or add one board.
    pub async fn set_board(&self, id: StationId, board: ScheduleResponse) {
        self.boards.write().await.insert(id, board);
    }

    /// Station ids with a board loaded.
    pub async fn available_stations(&self) -> Vec<StationId> {
        self.boards.read().await.keys().copied().collect()
    }
}

impl ScheduleSource for MockLrtClient {
    /// Serve the canned board, or an `Api` error for stations with none —
    /// mirrors the live endpoint failing rather than returning an empty
    /// board for ids it has no data for.
    async fn get_schedule(&self, id: &StationId) -> Result<ScheduleResponse, LrtError> {
        let boards = self.boards.read().await;
        boards.get(id).cloned().ok_or_else(|| LrtError::Api {
            status: 0,
            message: format!("no mock board for station {id}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn load_mock_data_dir() {
        let client = MockLrtClient::from_dir("data/mock_boards").unwrap();
        let stations = client.available_stations().await;
        assert!(stations.contains(&StationId::parse("1").unwrap()));
        assert!(stations.contains(&StationId::parse("600").unwrap()));
    }

    #[tokio::test]
    async fn serves_loaded_board() {
        let client = MockLrtClient::from_dir("data/mock_boards").unwrap();
        let resp = client
            .get_schedule(&StationId::parse("600").unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status, 1);
        assert!(resp.platform_list.is_some());
    }

    #[tokio::test]
    async fn missing_station_errors() {
        let client = MockLrtClient::from_dir("data/mock_boards").unwrap();
        let result = client.get_schedule(&StationId::parse("999").unwrap()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn set_board_overrides() {
        let client = MockLrtClient::from_boards(std::iter::empty());
        let id = StationId::parse("430").unwrap();
        client
            .set_board(
                id,
                ScheduleResponse {
                    status: 0,
                    system_time: None,
                    platform_list: None,
                },
            )
            .await;
        assert_eq!(client.get_schedule(&id).await.unwrap().status, 0);
    }
}
