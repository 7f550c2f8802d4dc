//! Time tokens and validity windows
//!
//! The role manager never interprets time. It only compares tokens with their
//! `Ord` implementation, so any totally-ordered type works as long as its
//! ordering matches chronological order.
//!
//! Plain strings satisfy `Ord` but compare lexicographically: `"999" > "1000"`.
//! String tokens are only safe when every value has the same width (for
//! example zero-padded `"00"`..`"20"`). [`Timestamp`] avoids the problem by
//! comparing milliseconds numerically.

use crate::error::{RoleError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Current wall-clock time
    pub fn now() -> Self {
        Timestamp(Utc::now().timestamp_millis())
    }

    /// Create a timestamp from epoch milliseconds
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    /// Epoch milliseconds
    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// Shift forward, saturating at `i64::MAX`
    pub fn plus_millis(self, millis: i64) -> Self {
        Timestamp(self.0.saturating_add(millis))
    }

    /// Shift backward, saturating at `i64::MIN`
    pub fn minus_millis(self, millis: i64) -> Self {
        Timestamp(self.0.saturating_sub(millis))
    }

    /// Convert to a UTC date-time, `None` when out of chrono's range
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.0)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp(dt.timestamp_millis())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Timestamp {
    type Err = RoleError;

    /// Parse a decimal millisecond string such as `"1718000000000"`
    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<i64>()
            .map(Timestamp)
            .map_err(|e| RoleError::invalid_argument(format!("invalid timestamp '{}': {}", s, e)))
    }
}

/// Closed validity interval `[start, end]`
///
/// `start <= end` is not enforced. An inverted window is legal and simply
/// never contains any time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow<T = Timestamp> {
    /// First instant the window is active
    pub start: T,
    /// Last instant the window is active
    pub end: T,
}

impl<T: Ord> TimeWindow<T> {
    /// Create a new window
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// Check whether `t` falls inside the window, both ends inclusive
    pub fn contains(&self, t: &T) -> bool {
        self.start <= *t && *t <= self.end
    }
}

impl<T: fmt::Display> fmt::Display for TimeWindow<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
