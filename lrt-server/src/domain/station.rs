//! Station identifier and station model.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::train::Train;

/// Error returned when parsing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A validated light-rail station id.
///
/// Station ids are short decimal strings assigned by the operator ("1",
/// "75", "920"). They are stable catalog keys, not sequential indices, so
/// they are compared as strings rather than numbers. This type guarantees
/// that any `StationId` value is 1 to 3 ASCII digits with no leading zero.
///
/// # Examples
///
/// ```
/// use lrt_server::domain::StationId;
///
/// let siu_hong = StationId::parse("100").unwrap();
/// assert_eq!(siu_hong.as_str(), "100");
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("07").is_err());
/// assert!(StationId::parse("12a").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId {
    bytes: [u8; 3],
    len: u8,
}

impl StationId {
    /// Parse a station id from a string.
    ///
    /// The input must be 1 to 3 ASCII digits without a leading zero.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let raw = s.as_bytes();

        if raw.is_empty() || raw.len() > 3 {
            return Err(InvalidStationId {
                reason: "must be 1 to 3 characters",
            });
        }

        for &b in raw {
            if !b.is_ascii_digit() {
                return Err(InvalidStationId {
                    reason: "must be ASCII digits 0-9",
                });
            }
        }

        if raw.len() > 1 && raw[0] == b'0' {
            return Err(InvalidStationId {
                reason: "must not have a leading zero",
            });
        }

        let mut bytes = [0u8; 3];
        bytes[..raw.len()].copy_from_slice(raw);

        Ok(StationId {
            bytes,
            len: raw.len() as u8,
        })
    }

    /// Returns the station id as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or("")
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.as_str())
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StationId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StationId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        StationId::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A station with its most recent fetch result attached.
///
/// The catalog entry (id, code, localized name) is immutable; `next_trains`
/// and `is_pinned` are view state recreated on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    /// Stable catalog id.
    pub station_id: StationId,

    /// Display code shown next to the name; same value as the id.
    pub station_code: String,

    /// Localized display name.
    pub station_name: String,

    /// Upcoming trains, sorted ascending by minutes to arrival.
    pub next_trains: Vec<Train>,

    /// Whether the user has pinned this station to the top of the list.
    pub is_pinned: bool,
}
