// Chess archive statistics
// Display-ready views over the archive statistics record

pub mod commands;
pub mod error;
pub mod features;
pub mod models;
pub mod utils;

// Re-export commonly used items
pub use error::{ReportError, Result};
pub use features::aggregate::aggregate_players;
pub use features::dashboard::Dashboard;
pub use features::reporter::{
    account_status_series, account_status_series_with, platform_series, player_summaries,
    summarize, top_players, top_ten_players, year_series,
};
pub use models::record::{CountMap, PlatformStat, PlayerEntry, StatisticsRecord};
pub use models::stats::{
    AccountStatus, AccountStatusRow, ActiveRatio, MalformedYear, PlatformSplit,
    PlayerSummaryRow, Summary, YearSeries,
};
pub use utils::config::{AccountKeys, ReporterConfig};
