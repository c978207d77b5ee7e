// Statistics reporter
// Pure views over a StatisticsRecord: summary, series and player rankings

use tracing::debug;

use crate::models::record::{PlayerEntry, StatisticsRecord};
use crate::models::stats::{
    AccountStatus, AccountStatusRow, ActiveRatio, MalformedYear, PlatformSplit,
    PlayerSummaryRow, Summary, YearSeries,
};
use crate::utils::config::{AccountKeys, CHESS_COM, DEFAULT_TOP_PLAYERS, LICHESS, NEVER_UPDATED};
use crate::utils::formatters::percent_of;

/// Headline metrics: totals, active account share and platform split
pub fn summarize(record: &StatisticsRecord) -> Summary {
    let active = record.active_accounts.total();
    let inactive = record.inactive_accounts.total();
    let exact_active = record.active_accounts.exact_total();
    let accounts = exact_active + record.inactive_accounts.exact_total();

    let active_ratio = if accounts > 0 {
        let active_pct = percent_of(exact_active, accounts);
        ActiveRatio::Ratio {
            active,
            inactive,
            active_pct,
            inactive_pct: 100 - active_pct,
        }
    } else {
        ActiveRatio::NoData
    };

    let chess_com_games = record.games_by_platform.get(CHESS_COM);
    let lichess_games = record.games_by_platform.get(LICHESS);
    let platform_games = chess_com_games as u128 + lichess_games as u128;

    let platform_split = if platform_games > 0 {
        let chess_com_pct = percent_of(chess_com_games as u128, platform_games);
        PlatformSplit::Split {
            chess_com_games,
            lichess_games,
            chess_com_pct,
            lichess_pct: 100 - chess_com_pct,
        }
    } else {
        PlatformSplit::NoGamesCollected
    };

    Summary {
        total_players: record.total_players,
        total_games: record.total_games,
        active_ratio,
        platform_split,
    }
}

/// One `(platform, games)` row per `games_by_platform` key, input order
pub fn platform_series(record: &StatisticsRecord) -> Vec<(String, u64)> {
    record
        .games_by_platform
        .iter()
        .map(|(platform, games)| (platform.to_string(), games))
        .collect()
}

/// Active then Inactive row for each platform in `active_accounts`
pub fn account_status_series(record: &StatisticsRecord) -> Vec<AccountStatusRow> {
    account_status_series_with(record, AccountKeys::ActiveOnly)
}

/// Account status rows with an explicit platform key policy
pub fn account_status_series_with(
    record: &StatisticsRecord,
    keys: AccountKeys,
) -> Vec<AccountStatusRow> {
    let mut platforms: Vec<&str> = record.active_accounts.keys().collect();
    if keys == AccountKeys::Union {
        platforms.extend(
            record
                .inactive_accounts
                .keys()
                .filter(|k| !record.active_accounts.contains_key(k)),
        );
    }

    platforms
        .into_iter()
        .flat_map(|platform| {
            [
                AccountStatusRow {
                    platform: platform.to_string(),
                    status: AccountStatus::Active,
                    count: record.active_accounts.get(platform),
                },
                AccountStatusRow {
                    platform: platform.to_string(),
                    status: AccountStatus::Inactive,
                    count: record.inactive_accounts.get(platform),
                },
            ]
        })
        .collect()
}

/// Games per year sorted ascending; unparseable keys are reported in `skipped`
pub fn year_series(record: &StatisticsRecord) -> YearSeries {
    let mut series = YearSeries::default();

    for (key, games) in record.games_by_year.iter() {
        match key.trim().parse::<i32>() {
            Ok(year) => series.points.push((year, games)),
            Err(_) => {
                debug!("Skipping malformed year key {:?}", key);
                series.skipped.push(MalformedYear {
                    key: key.to_string(),
                    games,
                });
            }
        }
    }

    series.points.sort_by_key(|(year, _)| *year);
    series
}

/// Player table sorted by total games descending, ties keep input order
pub fn player_summaries(record: &StatisticsRecord) -> Vec<PlayerSummaryRow> {
    let mut rows: Vec<PlayerSummaryRow> = record.players.iter().map(summarize_player).collect();
    // sort_by is stable
    rows.sort_by(|a, b| b.total_games.cmp(&a.total_games));
    rows
}

/// First `n` rows of `player_summaries`
pub fn top_players(record: &StatisticsRecord, n: usize) -> Vec<PlayerSummaryRow> {
    let mut rows = player_summaries(record);
    rows.truncate(n);
    rows
}

/// `top_players` with the default dashboard size
pub fn top_ten_players(record: &StatisticsRecord) -> Vec<PlayerSummaryRow> {
    top_players(record, DEFAULT_TOP_PLAYERS)
}

fn summarize_player(player: &PlayerEntry) -> PlayerSummaryRow {
    let chess_com = player.platform(CHESS_COM);
    let lichess = player.platform(LICHESS);

    let chess_com_games = chess_com.map(|p| p.total_games).unwrap_or(0);
    let lichess_games = lichess.map(|p| p.total_games).unwrap_or(0);

    // Any platform counts towards the latest update, not just the two above
    let last_update = player
        .platforms
        .iter()
        .filter_map(|(_, stat)| stat.last_update.as_deref())
        .max()
        .unwrap_or(NEVER_UPDATED)
        .to_string();

    PlayerSummaryRow {
        name: player.name.clone(),
        fide_id: player.fide_id.clone(),
        total_games: chess_com_games.saturating_add(lichess_games),
        chess_com_games,
        lichess_games,
        chess_com_active: chess_com.map(|p| p.active()).unwrap_or(false),
        lichess_active: lichess.map(|p| p.active()).unwrap_or(false),
        last_update,
    }
}
