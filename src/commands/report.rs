// Report command - plain-text rendering of the archive dashboard

use chrono::{DateTime, Utc};

use crate::features::dashboard::Dashboard;
use crate::models::stats::PlayerSummaryRow;
use crate::utils::config::get_platform_label;
use crate::utils::formatters::{format_number, truncate, yes_no};

const NAME_WIDTH: usize = 24;

/// Render the dashboard as a text report
pub fn render_text(dashboard: &Dashboard, generated_at: Option<DateTime<Utc>>) -> String {
    let mut content = String::new();

    content.push_str("Archive Statistics\n");
    content.push_str("==================\n");
    if let Some(at) = generated_at {
        content.push_str(&format!("Generated: {}\n", at.format("%Y-%m-%d %H:%M:%S UTC")));
    }
    content.push('\n');

    // Headline metrics
    content.push_str("Archive Overview\n");
    content.push_str("----------------\n");
    content.push_str(&format!("Total Players: {}\n", format_number(dashboard.summary.total_players)));
    content.push_str(&format!("Total Games: {}\n", format_number(dashboard.summary.total_games)));
    content.push_str(&format!("Active Accounts: {}\n", dashboard.active_accounts_caption()));
    content.push_str(&format!("Platform Split: {}\n\n", dashboard.platform_split_caption()));

    content.push_str("Games by Platform\n");
    content.push_str("-----------------\n");
    if dashboard.has_platform_games() {
        for (platform, games) in &dashboard.platforms {
            content.push_str(&format!("{}: {}\n", get_platform_label(platform), format_number(*games)));
        }
    } else {
        content.push_str("No games collected yet.\n");
    }
    content.push('\n');

    content.push_str("Account Status\n");
    content.push_str("--------------\n");
    if dashboard.has_account_data() {
        for row in &dashboard.account_status {
            content.push_str(&format!(
                "{} {}: {}\n",
                get_platform_label(&row.platform),
                row.status.label(),
                format_number(row.count)
            ));
        }
    } else {
        content.push_str("No account data available.\n");
    }
    content.push('\n');

    content.push_str("Games by Year\n");
    content.push_str("-------------\n");
    if dashboard.has_year_games() {
        for (year, games) in &dashboard.years.points {
            content.push_str(&format!("{}: {}\n", year, format_number(*games)));
        }
    } else {
        content.push_str("No games collected yet.\n");
    }
    content.push('\n');

    content.push_str("Player Statistics\n");
    content.push_str("-----------------\n");
    if dashboard.players.is_empty() {
        content.push_str("No player data available.\n");
        return content;
    }

    content.push_str(&format!(
        "{:<width$} {:<10} {:>8} {:>10} {:>8} {:<7} {:<7} {}\n",
        "Player",
        "FIDE ID",
        "Total",
        "Chess.com",
        "Lichess",
        "C.com",
        "Lichess",
        "Last Update",
        width = NAME_WIDTH
    ));
    for row in &dashboard.players {
        content.push_str(&player_line(row));
    }
    content.push('\n');

    if dashboard.has_top_player_games() {
        content.push_str(&format!("Top {} Players by Games Collected\n", dashboard.top_players.len()));
        content.push_str("---------------------------------\n");
        for (i, row) in dashboard.top_players.iter().enumerate() {
            content.push_str(&format!(
                "#{}. {}: {} (Chess.com {}, Lichess {})\n",
                i + 1,
                row.name,
                format_number(row.total_games),
                format_number(row.chess_com_games),
                format_number(row.lichess_games)
            ));
        }
    }

    content
}

fn player_line(row: &PlayerSummaryRow) -> String {
    format!(
        "{:<width$} {:<10} {:>8} {:>10} {:>8} {:<7} {:<7} {}\n",
        truncate(&row.name, NAME_WIDTH),
        row.fide_id,
        format_number(row.total_games),
        format_number(row.chess_com_games),
        format_number(row.lichess_games),
        yes_no(row.chess_com_active),
        yes_no(row.lichess_active),
        row.last_update,
        width = NAME_WIDTH
    )
}
