use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use eyre::{eyre, Report, Result};
use serde::{Deserialize, Serialize};

use crate::utils::timestamp_to_date;

/// A block as reported by the remote chain: its height and its timestamp in
/// epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockInfo {
    pub number: u64,
    pub timestamp: u64,
}

impl BlockInfo {
    pub fn new(number: u64, timestamp: u64) -> Self {
        Self { number, timestamp }
    }

    pub fn date(&self) -> DateTime<Utc> {
        timestamp_to_date(self.timestamp)
    }
}

/// The outcome of resolving a date to a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedBlock {
    #[serde(serialize_with = "serialize_block")]
    pub block: BlockInfo,
    /// Refinement rounds consumed, including a bias adjustment step.
    pub retries: u64,
    /// `target - block.timestamp`, rounded up.
    pub seconds_from_target: i64,
}

impl ResolvedBlock {
    pub fn height(&self) -> u64 {
        self.block.number
    }

    pub fn timestamp(&self) -> u64 {
        self.block.timestamp
    }
}

fn serialize_block<S>(block: &BlockInfo, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    #[derive(Serialize)]
    struct Dated {
        number: u64,
        timestamp: u64,
        date: DateTime<Utc>,
    }

    Dated {
        number: block.number,
        timestamp: block.timestamp,
        date: block.date(),
    }
    .serialize(serializer)
}

/// Which side of the target a resolved block should fall on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockPosition {
    Before,
    After,
    #[default]
    Closest,
}

impl Display for BlockPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let formatted = match self {
            Self::Before => "before",
            Self::After => "after",
            Self::Closest => "closest",
        };

        write!(f, "{formatted}")
    }
}

impl FromStr for BlockPosition {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "before" => Ok(Self::Before),
            "after" => Ok(Self::After),
            "closest" => Ok(Self::Closest),
            other => Err(eyre!("block position {other} is not supported")),
        }
    }
}

/// A user supplied date in any of the accepted forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// Milliseconds since the unix epoch.
    Millis(i64),
    /// An ISO-8601 date or date-time.
    Text(String),
    DateTime(DateTime<Utc>),
}

impl From<i64> for DateInput {
    fn from(millis: i64) -> Self {
        DateInput::Millis(millis)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(date: DateTime<Utc>) -> Self {
        DateInput::DateTime(date)
    }
}

impl Display for DateInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Millis(millis) => write!(f, "{millis}"),
            Self::Text(text) => write!(f, "{text}"),
            Self::DateTime(date) => write!(f, "{}", date.to_rfc3339()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_position_from_str() {
        assert_eq!("before".parse::<BlockPosition>().unwrap(), BlockPosition::Before);
        assert_eq!("AFTER".parse::<BlockPosition>().unwrap(), BlockPosition::After);
        assert_eq!(BlockPosition::default(), BlockPosition::Closest);
        assert!("nearest".parse::<BlockPosition>().is_err());
    }

    #[test]
    fn test_block_position_display_round_trip() {
        for position in [BlockPosition::Before, BlockPosition::After, BlockPosition::Closest] {
            assert_eq!(position.to_string().parse::<BlockPosition>().unwrap(), position);
        }
    }

    #[test]
    fn test_resolved_block_serialization() {
        let resolved = ResolvedBlock {
            block: BlockInfo::new(11558517, 1609372813),
            retries: 3,
            seconds_from_target: -13,
        };

        let json = serde_json::to_value(resolved).unwrap();
        assert_eq!(json["block"]["number"], 11558517);
        assert_eq!(json["block"]["date"], "2020-12-31T00:00:13Z");
        assert_eq!(json["secondsFromTarget"], -13);

        let parsed: ResolvedBlock = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, resolved);
    }

    #[test]
    fn test_date_input_display() {
        assert_eq!(DateInput::from(1609459200000i64).to_string(), "1609459200000");
        assert_eq!(DateInput::from("2021-01-01").to_string(), "2021-01-01");
    }
}
