use anyhow::Result;
use clap::Parser;
use leetcode_concat::leetcode::parse_id_arg;
use leetcode_concat::render::{write_output, DEFAULT_HOST, DEFAULT_OUTPUT};
use leetcode_concat::{LeetCodeClient, LeetcodeScraperBuilder};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "leetcode-concat")]
#[command(about = "Concatenate LeetCode problem statements into a text file")]
struct Cli {
    /// First frontend ID (falls back to 1 when missing or not a number)
    start_id: Option<String>,
    /// Last frontend ID, inclusive (falls back to 10)
    end_id: Option<String>,
    /// Output file, overwritten on every run
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Pause between question requests
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,
    /// Per-request timeout
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("{:#}", e);
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let start = parse_id_arg(cli.start_id.as_deref(), 1);
    let end = parse_id_arg(cli.end_id.as_deref(), 10);
    info!("Fetching LeetCode questions from ID {} to {}...", start, end);

    let client = LeetCodeClient::new(&cli.host, Duration::from_secs(cli.timeout_secs))?;
    let scraper = LeetcodeScraperBuilder::default()
        .ids(start..=end)
        .delay(Duration::from_millis(cli.delay_ms))
        .build()?;

    let report = scraper.scrape(&client).await;
    let text = report.render(client.host())?;
    write_output(&cli.output, &text)?;
    info!("Questions saved to {}", cli.output.display());
    Ok(())
}
