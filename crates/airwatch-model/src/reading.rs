//! Air quality sensor readings

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One air quality sample as returned by /api/data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub air_quality: f64,
    /// ISO-8601 timestamp, taken verbatim from the server
    pub timestamp: String,
}

impl Reading {
    /// Timestamp rendered in local time for display.
    ///
    /// Falls back to the raw string when the server sends something
    /// that is not parseable as RFC 3339.
    pub fn local_time(&self) -> String {
        match self.timestamp.parse::<DateTime<Local>>() {
            Ok(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            Err(_) => self.timestamp.clone(),
        }
    }
}
