//! Target time input
//!
//! Raw keystrokes are normalized into an `HH:MM` shape and then validated
//! against the 24-hour clock. Invalid input never fails; it falls back to
//! [`FALLBACK_TIME`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Returned by [`validate_time`] for anything outside 00:00..=23:59
pub const FALLBACK_TIME: &str = "23:59";

/// Strip non-digits, keep the last four digits (zero-padded) and insert a
/// colon after the hours. No range check: "99:99" is possible.
pub fn normalize_time(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let tail = &digits[digits.len().saturating_sub(4)..];

    let mut padded = String::with_capacity(5);
    for _ in tail.len()..4 {
        padded.push('0');
    }
    padded.extend(tail);
    padded.insert(2, ':');
    padded
}

/// Accept a strict `HH:MM` (00-23, 00-59), otherwise [`FALLBACK_TIME`]
pub fn validate_time(normalized: &str) -> String {
    match ClockTime::parse(normalized) {
        Some(_) => normalized.to_string(),
        None => FALLBACK_TIME.to_string(),
    }
}

/// Validated 24-hour wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub const FALLBACK: ClockTime = ClockTime {
        hour: 23,
        minute: 59,
    };

    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Strict parse of `HH:MM`, two digits each, no normalization
    pub fn parse(value: &str) -> Option<Self> {
        let bytes = value.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return None;
        }
        let two_digits = |hi: u8, lo: u8| -> Option<u8> {
            (hi.is_ascii_digit() && lo.is_ascii_digit()).then(|| (hi - b'0') * 10 + (lo - b'0'))
        };
        let hour = two_digits(bytes[0], bytes[1])?;
        let minute = two_digits(bytes[3], bytes[4])?;
        Self::new(hour, minute)
    }

    /// Interpret one keystroke's worth of raw input; always yields a time
    pub fn from_input(raw: &str) -> Self {
        Self::parse(&normalize_time(raw)).unwrap_or(Self::FALLBACK)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid HH:MM time: {raw}")))
    }
}
