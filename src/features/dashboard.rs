// Dashboard view model
// Everything one render of the archive statistics page needs

use serde::Serialize;

use crate::features::reporter;
use crate::models::record::{saturating_sum, StatisticsRecord};
use crate::models::stats::{
    AccountStatusRow, ActiveRatio, PlatformSplit, PlayerSummaryRow, Summary, YearSeries,
};
use crate::utils::config::{get_platform_label, ReporterConfig, CHESS_COM, LICHESS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub summary: Summary,
    pub platforms: Vec<(String, u64)>,
    pub account_status: Vec<AccountStatusRow>,
    pub years: YearSeries,
    pub players: Vec<PlayerSummaryRow>,
    pub top_players: Vec<PlayerSummaryRow>,
}

impl Dashboard {
    pub fn build(record: &StatisticsRecord, config: &ReporterConfig) -> Self {
        let players = reporter::player_summaries(record);
        let top_players = players.iter().take(config.top_players).cloned().collect();

        Self {
            summary: reporter::summarize(record),
            platforms: reporter::platform_series(record),
            account_status: reporter::account_status_series_with(record, config.account_keys),
            years: reporter::year_series(record),
            players,
            top_players,
        }
    }

    pub fn has_platform_games(&self) -> bool {
        saturating_sum(self.platforms.iter().map(|(_, games)| *games)) > 0
    }

    pub fn has_account_data(&self) -> bool {
        saturating_sum(self.account_status.iter().map(|row| row.count)) > 0
    }

    pub fn has_year_games(&self) -> bool {
        self.years.total_games() > 0
    }

    pub fn has_top_player_games(&self) -> bool {
        saturating_sum(self.top_players.iter().map(|row| row.total_games)) > 0
    }

    /// "3 (75%)", or "0" without account data
    pub fn active_accounts_caption(&self) -> String {
        match self.summary.active_ratio {
            ActiveRatio::Ratio { active, active_pct, .. } => format!("{} ({}%)", active, active_pct),
            ActiveRatio::NoData => "0".to_string(),
        }
    }

    /// "Chess.com: 75%, Lichess: 25%", or "No games collected"
    pub fn platform_split_caption(&self) -> String {
        match self.summary.platform_split {
            PlatformSplit::Split { chess_com_pct, lichess_pct, .. } => format!(
                "{}: {}%, {}: {}%",
                get_platform_label(CHESS_COM),
                chess_com_pct,
                get_platform_label(LICHESS),
                lichess_pct
            ),
            PlatformSplit::NoGamesCollected => "No games collected".to_string(),
        }
    }
}
