//! Route identifier and route model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid route number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route number: {reason}")]
pub struct InvalidRouteNumber {
    reason: &'static str,
}

/// A validated light-rail route number.
///
/// Route numbers are three decimal digits, optionally followed by a `P`
/// suffix marking a short-working variant ("505", "614P", "761P").
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RouteNumber {
    bytes: [u8; 4],
    len: u8,
}

impl RouteNumber {
    /// Parse a route number from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidRouteNumber> {
        let raw = s.as_bytes();

        let (digits, suffix) = match raw {
            [d @ .., b'P'] => (d, 1),
            d => (d, 0),
        };

        if digits.len() != 3 {
            return Err(InvalidRouteNumber {
                reason: "must be 3 digits with an optional P suffix",
            });
        }

        for &b in digits {
            if !b.is_ascii_digit() {
                return Err(InvalidRouteNumber {
                    reason: "must be ASCII digits 0-9",
                });
            }
        }

        let mut bytes = [0u8; 4];
        bytes[..raw.len()].copy_from_slice(raw);

        Ok(RouteNumber {
            bytes,
            len: (digits.len() + suffix) as u8,
        })
    }

    /// Returns the route number as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII digits and 'P' are ever stored
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or("")
    }
}

impl fmt::Debug for RouteNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteNumber({})", self.as_str())
    }
}

impl fmt::Display for RouteNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RouteNumber {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RouteNumber {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        RouteNumber::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A static light-rail route: an ordered station sequence plus endpoints.
///
/// The `stations` sequence defines the canonical forward direction. The
/// reverse direction is the literal reversal, except where the catalog's
/// direction resolver documents otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Route number, e.g. "610" or "614P".
    pub route_number: &'static str,

    /// Ordered station ids from start to end (forward direction).
    pub stations: &'static [&'static str],

    /// English name of the starting terminus.
    pub start_en: &'static str,

    /// Chinese name of the starting terminus.
    pub start_zh: &'static str,

    /// English name of the final terminus.
    pub end_en: &'static str,

    /// Chinese name of the final terminus.
    pub end_zh: &'static str,

    /// Circular routes start and end at the same station.
    pub is_circular: bool,
}

impl Route {
    /// Localized name of the starting terminus.
    pub fn start_name(&self, lang: super::Language) -> &'static str {
        match lang {
            super::Language::En => self.start_en,
            super::Language::Zh => self.start_zh,
        }
    }

    /// Localized name of the final terminus.
    pub fn end_name(&self, lang: super::Language) -> &'static str {
        match lang {
            super::Language::En => self.end_en,
            super::Language::Zh => self.end_zh,
        }
    }
}
