use clap::Parser;
use std::path::PathBuf;

use webbot_smoke::runner::SmokeTest;
use webbot_smoke::utils::config::{RunConfig, DEFAULT_BASE_URL};
use webbot_smoke::write_reports;

#[derive(Parser)]
#[command(name = "webbot-smoke")]
#[command(author = "NL Team")]
#[command(version = "0.1.0")]
#[command(about = "Smoke test for the Web-Bot backend", long_about = None)]
struct Cli {
    /// Backend base URL
    #[arg(default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Output directory for reports
    #[arg(short, long, default_value = "./output")]
    output: PathBuf,

    /// Write JSON and JUnit reports
    #[arg(long, default_value = "false")]
    report: bool,

    /// Enable debug logging
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = RunConfig::with_base_url(&cli.base_url);
    let threshold = config.threshold;

    let mut smoke = SmokeTest::new(config)?;
    let summary = smoke.run_all().await;

    if cli.report {
        let report = smoke.report(&summary);
        write_reports(&report, &cli.output)?;
    }

    std::process::exit(summary.exit_code(threshold));
}
