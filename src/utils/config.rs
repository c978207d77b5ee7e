// Centralized configuration for the archive statistics reporter

use std::env;

use tracing::warn;

/// Platform key used by the Chess.com collector
pub const CHESS_COM: &str = "chess.com";

/// Platform key used by the Lichess collector
pub const LICHESS: &str = "lichess";

/// Platforms every aggregated record starts with
pub const SEEDED_PLATFORMS: [&str; 2] = [CHESS_COM, LICHESS];

/// Number of rows in the top players view
pub const DEFAULT_TOP_PLAYERS: usize = 10;

/// Shown when a player has no platform update timestamp
pub const NEVER_UPDATED: &str = "Never";

/// Name used for players without one
pub const UNKNOWN_PLAYER: &str = "Unknown";

/// Get display label for a platform key
/// Unknown platforms are shown verbatim
pub fn get_platform_label(platform: &str) -> &str {
    match platform {
        CHESS_COM => "Chess.com",
        LICHESS => "Lichess",
        other => other,
    }
}

/// Which platform keys drive the account status view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountKeys {
    /// Only platforms listed in `active_accounts`
    #[default]
    ActiveOnly,
    /// Platforms listed in either `active_accounts` or `inactive_accounts`
    Union,
}

impl AccountKeys {
    pub fn label(&self) -> &'static str {
        match self {
            AccountKeys::ActiveOnly => "active",
            AccountKeys::Union => "union",
        }
    }
}

impl std::str::FromStr for AccountKeys {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" | "active_only" | "active-only" => Ok(AccountKeys::ActiveOnly),
            "union" | "all" => Ok(AccountKeys::Union),
            _ => Err(format!("Unknown account key policy: {}", s)),
        }
    }
}

/// Reporter settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporterConfig {
    pub top_players: usize,
    pub account_keys: AccountKeys,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            top_players: DEFAULT_TOP_PLAYERS,
            account_keys: AccountKeys::default(),
        }
    }
}

impl ReporterConfig {
    /// Read settings from `ARCHIVE_STATS_TOP_PLAYERS` and `ARCHIVE_STATS_ACCOUNT_KEYS`
    /// Unparseable values keep the default
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("ARCHIVE_STATS_TOP_PLAYERS") {
            match raw.trim().parse::<usize>() {
                Ok(n) => config.top_players = n,
                Err(_) => warn!("Ignoring ARCHIVE_STATS_TOP_PLAYERS={:?}", raw),
            }
        }

        if let Some(raw) = lookup("ARCHIVE_STATS_ACCOUNT_KEYS") {
            match raw.parse::<AccountKeys>() {
                Ok(keys) => config.account_keys = keys,
                Err(e) => warn!("{}", e),
            }
        }

        config
    }
}
