// Statistics record data model
// Matches the archive statistics document handed to the dashboard

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use tracing::debug;

use crate::error::{ReportError, Result};
use crate::utils::config::UNKNOWN_PLAYER;

/// Insertion-ordered map from a key to a non-negative count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountMap {
    entries: Vec<(String, u64)>,
    /// Key -> position in `entries`
    index: HashMap<String, usize>,
}

impl CountMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for `key`, 0 when absent
    pub fn get(&self, key: &str) -> u64 {
        self.index
            .get(key)
            .map(|&i| self.entries[i].1)
            .unwrap_or(0)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Set `key` to `count`, keeping its position if already present
    pub fn insert(&mut self, key: impl Into<String>, count: u64) {
        let key = key.into();
        match self.index.get(&key).copied() {
            Some(i) => self.entries[i].1 = count,
            None => self.push(key, count),
        }
    }

    /// Add `delta` to `key`, appending it when absent. Saturates at `u64::MAX`.
    pub fn add(&mut self, key: &str, delta: u64) {
        match self.index.get(key).copied() {
            Some(i) => {
                let count = &mut self.entries[i].1;
                *count = count.saturating_add(delta);
            }
            None => self.push(key.to_string(), delta),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Sum of all counts, saturating at `u64::MAX`
    pub fn total(&self) -> u64 {
        saturating_sum(self.entries.iter().map(|(_, v)| *v))
    }

    /// Sum of all counts without saturation, for ratios
    pub fn exact_total(&self) -> u128 {
        self.entries.iter().map(|(_, v)| *v as u128).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, key: String, count: u64) {
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, count));
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for CountMap {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut map = CountMap::new();
        for (key, count) in iter {
            map.insert(key, count);
        }
        map
    }
}

/// Sum of counts that stops at `u64::MAX` instead of overflowing
pub fn saturating_sum(counts: impl IntoIterator<Item = u64>) -> u64 {
    counts.into_iter().fold(0u64, u64::saturating_add)
}

impl Serialize for CountMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, count) in &self.entries {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

/// Per-platform statistics for one player
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformStat {
    pub total_games: u64,
    /// None means the collector never recorded a status
    pub is_active: Option<bool>,
    pub last_update: Option<String>,
}

impl PlatformStat {
    /// Unset status counts as active
    pub fn active(&self) -> bool {
        self.is_active.unwrap_or(true)
    }

    fn from_value(value: &Value) -> Self {
        let is_active = match value.get("is_active") {
            None => None,
            Some(Value::Bool(b)) => Some(*b),
            Some(other) => Some(is_truthy(other)),
        };

        let last_update = value
            .get("last_update")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());

        Self {
            total_games: value
                .get("total_games")
                .map(|v| count_or_zero(v, "total_games"))
                .unwrap_or(0),
            is_active,
            last_update,
        }
    }
}

/// One archived player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerEntry {
    pub name: String,
    pub fide_id: String,
    /// Platform key -> stats, in input order
    pub platforms: Vec<(String, PlatformStat)>,
    /// Year key -> games, used when aggregating a record
    pub games_by_year: CountMap,
}

impl Default for PlayerEntry {
    fn default() -> Self {
        Self {
            name: UNKNOWN_PLAYER.to_string(),
            fide_id: String::new(),
            platforms: Vec::new(),
            games_by_year: CountMap::new(),
        }
    }
}

impl PlayerEntry {
    pub fn new(name: impl Into<String>, fide_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fide_id: fide_id.into(),
            ..Default::default()
        }
    }

    /// Builder-style platform insertion
    pub fn with_platform(mut self, platform: impl Into<String>, stat: PlatformStat) -> Self {
        let platform = platform.into();
        match self.platforms.iter_mut().find(|(k, _)| *k == platform) {
            Some(entry) => entry.1 = stat,
            None => self.platforms.push((platform, stat)),
        }
        self
    }

    pub fn platform(&self, platform: &str) -> Option<&PlatformStat> {
        self.platforms
            .iter()
            .find(|(k, _)| k == platform)
            .map(|(_, stat)| stat)
    }

    fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        let name = obj
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or(UNKNOWN_PLAYER)
            .to_string();

        let fide_id = match obj.get("fide_id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };

        let platforms = obj
            .get("platforms")
            .and_then(|v| v.as_object())
            .map(|platforms| {
                platforms
                    .iter()
                    .map(|(key, stat)| (key.clone(), PlatformStat::from_value(stat)))
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            name,
            fide_id,
            platforms,
            games_by_year: count_map(obj.get("games_by_year"), "games_by_year"),
        })
    }
}

/// The archive statistics document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatisticsRecord {
    pub total_players: u64,
    pub total_games: u64,
    pub active_accounts: CountMap,
    pub inactive_accounts: CountMap,
    pub games_by_platform: CountMap,
    /// Year keys are kept verbatim, parsing happens in the year series
    pub games_by_year: CountMap,
    pub players: Vec<PlayerEntry>,
}

impl StatisticsRecord {
    /// Decode a record from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Decode a record from a JSON value
    /// Missing or wrong-typed fields fall back to defaults; only a
    /// non-object document is rejected.
    pub fn from_value(value: &Value) -> Result<Self> {
        let obj = value.as_object().ok_or_else(|| {
            ReportError::InvalidInput(format!(
                "statistics record must be an object, got {}",
                json_type_name(value)
            ))
        })?;

        let players = obj
            .get("players")
            .and_then(|v| v.as_array())
            .map(|players| {
                players
                    .iter()
                    .filter_map(|p| {
                        let entry = PlayerEntry::from_value(p);
                        if entry.is_none() {
                            debug!("Skipping player entry that is not an object: {}", p);
                        }
                        entry
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            total_players: obj
                .get("total_players")
                .map(|v| count_or_zero(v, "total_players"))
                .unwrap_or(0),
            total_games: obj
                .get("total_games")
                .map(|v| count_or_zero(v, "total_games"))
                .unwrap_or(0),
            active_accounts: count_map(obj.get("active_accounts"), "active_accounts"),
            inactive_accounts: count_map(obj.get("inactive_accounts"), "inactive_accounts"),
            games_by_platform: count_map(obj.get("games_by_platform"), "games_by_platform"),
            games_by_year: count_map(obj.get("games_by_year"), "games_by_year"),
            players,
        })
    }
}

/// Non-negative integer from a number or numeric string
fn parse_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn count_or_zero(value: &Value, field: &str) -> u64 {
    parse_count(value).unwrap_or_else(|| {
        debug!("Non-count value {} in {}, using 0", value, field);
        0
    })
}

fn count_map(value: Option<&Value>, field: &str) -> CountMap {
    let Some(obj) = value.and_then(|v| v.as_object()) else {
        return CountMap::new();
    };

    obj.iter()
        .map(|(key, v)| (key.clone(), count_or_zero(v, field)))
        .collect()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
