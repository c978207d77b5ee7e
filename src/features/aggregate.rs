// Archive aggregation
// Builds the statistics record from the per-player archive entries

use tracing::debug;

use crate::models::record::{CountMap, PlayerEntry, StatisticsRecord};
use crate::utils::config::SEEDED_PLATFORMS;

/// Aggregate player entries into a statistics record
///
/// Every platform's games count towards `total_games` and the account
/// counters, but `games_by_platform` only tracks the seeded platforms.
/// `games_by_year` is the per-year sum of each player's year counts.
pub fn aggregate_players(players: Vec<PlayerEntry>) -> StatisticsRecord {
    let seeded = || -> CountMap { SEEDED_PLATFORMS.iter().map(|p| (*p, 0)).collect() };

    let mut record = StatisticsRecord {
        total_players: players.len() as u64,
        games_by_platform: seeded(),
        active_accounts: seeded(),
        inactive_accounts: seeded(),
        ..Default::default()
    };

    for player in &players {
        for (platform, stat) in &player.platforms {
            record.total_games = record.total_games.saturating_add(stat.total_games);

            if stat.active() {
                record.active_accounts.add(platform, 1);
            } else {
                record.inactive_accounts.add(platform, 1);
            }

            if record.games_by_platform.contains_key(platform) {
                record.games_by_platform.add(platform, stat.total_games);
            } else {
                debug!("Not tracking games for platform {:?} ({})", platform, player.name);
            }
        }

        for (year, games) in player.games_by_year.iter() {
            record.games_by_year.add(year, games);
        }
    }

    record.players = players;
    record
}
