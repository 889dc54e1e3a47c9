use anyhow::anyhow;
use chrono::{Datelike, NaiveDate, Utc};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, prelude::*};

use rich_validator::{
    chart::{
        client::{ChartClient, RetryPolicy},
        DateRange,
    },
    leaderboard::{view, Leaderboard},
    network::Network,
};

#[derive(Parser, Debug)]
#[command(name = "rich-validator", author, version, about, long_about = Some("Rich Validator\n\n\
Reward leaderboard for blockchain validator accounts"))]
struct Cli {
    /// Network to query (kusama or polkadot)
    #[arg(short, long, default_value = "kusama")]
    network: String,
    /// Start of the reward range, YYYY-MM-DD [default: Jan 1 of the current year]
    #[arg(short, long)]
    start_date: Option<NaiveDate>,
    /// End of the reward range, YYYY-MM-DD [default: today]
    #[arg(short, long)]
    end_date: Option<NaiveDate>,
    /// Only list validators with an identity or sub-account display name
    #[arg(short, long, default_value_t = false)]
    identity_only: bool,
    /// Print the sub-rows of every entry
    #[arg(long, default_value_t = false)]
    expand_all: bool,
    /// Output JSON data
    #[arg(short, long, default_value_t = false)]
    json: bool,
    /// Log level
    #[arg(long, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,
}

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let stdout_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(stdout_layer.with_filter(cli.log_level))
        .init();

    let network = Network::from_name(&cli.network)
        .ok_or_else(|| anyhow!("unknown network: {}", cli.network))?;
    let today = Utc::now().date_naive();
    let start_date = cli
        .start_date
        .or_else(|| NaiveDate::from_ymd_opt(today.year(), 1, 1))
        .ok_or_else(|| anyhow!("invalid start date"))?;
    let end_date = cli.end_date.unwrap_or(today);
    let range = DateRange::new(start_date, end_date);

    info!(
        network = network.name,
        start_timestamp = range.start_timestamp_ms(),
        end_timestamp = range.end_timestamp_ms(),
        "fetching reward chart data"
    );
    let client = ChartClient::new(RetryPolicy::default());
    let data = client.fetch(network, &range).await?;

    let mut board = Leaderboard::new(network);
    board.ingest(&data);
    let (skipped_count, _) = board.skipped();
    if skipped_count > 0 {
        info!(skipped_count, "rewards without a matching account");
    }
    let entries = board.into_sorted();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!(
        "{:>4}  {:<48} {:>24}",
        "#",
        "ID/ADDRESS",
        format!("TOTAL REWARD ({})", network.ticker)
    );
    for row in view::visible_rows(&entries, cli.identity_only) {
        let entry = row.entry;
        let display = if entry.subs.is_empty() {
            entry.display.clone()
        } else {
            format!("{} ({})", entry.display, entry.subs.len())
        };
        println!(
            "{:>4}  {:<48} {:>24}",
            row.position,
            display,
            entry.total.format(network.decimals, 2, None)
        );
        if cli.expand_all {
            for sub in &entry.subs {
                println!(
                    "      |--- {:<43} {:>24}",
                    sub.display,
                    sub.total.format(network.decimals, 2, None)
                );
            }
        }
    }
    Ok(())
}
