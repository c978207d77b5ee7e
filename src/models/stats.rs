// Derived statistics views handed to the presentation layer

use serde::Serialize;

use crate::models::record::saturating_sum;

/// Headline metrics for the archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_players: u64,
    pub total_games: u64,
    pub active_ratio: ActiveRatio,
    pub platform_split: PlatformSplit,
}

/// Share of active accounts across all platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ActiveRatio {
    /// No accounts recorded at all
    NoData,
    Ratio {
        active: u64,
        inactive: u64,
        active_pct: u8,
        inactive_pct: u8,
    },
}

/// Chess.com vs Lichess share of collected games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PlatformSplit {
    NoGamesCollected,
    Split {
        chess_com_games: u64,
        lichess_games: u64,
        chess_com_pct: u8,
        lichess_pct: u8,
    },
}

/// Account status label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl AccountStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Inactive => "Inactive",
        }
    }
}

/// One bar of the account status chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountStatusRow {
    pub platform: String,
    pub status: AccountStatus,
    pub count: u64,
}

/// Games-per-year points plus the keys that could not be read as a year
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct YearSeries {
    /// Sorted ascending by year
    pub points: Vec<(i32, u64)>,
    pub skipped: Vec<MalformedYear>,
}

impl YearSeries {
    pub fn total_games(&self) -> u64 {
        saturating_sum(self.points.iter().map(|(_, games)| *games))
    }
}

/// A `games_by_year` key that is not an integer year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedYear {
    pub key: String,
    pub games: u64,
}

impl std::fmt::Display for MalformedYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "year key {:?} ({} games) is not an integer year", self.key, self.games)
    }
}

/// Row of the player statistics table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSummaryRow {
    pub name: String,
    pub fide_id: String,
    pub total_games: u64,
    pub chess_com_games: u64,
    pub lichess_games: u64,
    pub chess_com_active: bool,
    pub lichess_active: bool,
    /// Most recent platform update, or "Never"
    pub last_update: String,
}
