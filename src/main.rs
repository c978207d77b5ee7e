// Archive Stats - command line front end
// Prints the archive statistics dashboard for a statistics JSON file

use std::env;
use std::fs;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use archive_stats::commands::report::render_text;
use archive_stats::{Dashboard, ReporterConfig, StatisticsRecord};

const USAGE: &str = "usage: archive-stats <stats.json> [--json]";

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "archive_stats=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut path = None;
    let mut as_json = false;
    for arg in env::args().skip(1) {
        if arg == "--json" {
            as_json = true;
        } else if arg == "-h" || arg == "--help" {
            println!("{}", USAGE);
            return Ok(());
        } else if path.is_none() {
            path = Some(arg);
        } else {
            bail!("unexpected argument {:?}\n{}", arg, USAGE);
        }
    }
    let Some(path) = path else {
        bail!("{}", USAGE);
    };

    let config = ReporterConfig::from_env();
    info!(
        "Reporting on {} (top {}, account keys: {})",
        path,
        config.top_players,
        config.account_keys.label()
    );

    let text = fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))?;
    let record = StatisticsRecord::from_json_str(&text)
        .with_context(|| format!("Failed to load statistics from {}", path))?;

    let dashboard = Dashboard::build(&record, &config);
    for malformed in &dashboard.years.skipped {
        warn!("Skipping games_by_year entry: {}", malformed);
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        print!("{}", render_text(&dashboard, Some(chrono::Utc::now())));
    }

    info!("Report done: {} players", dashboard.players.len());
    Ok(())
}
