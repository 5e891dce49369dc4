use anyhow::Context;

use stockpulse_cli::AppConfig;

fn main() -> anyhow::Result<()> {
    stockpulse_observability::init();

    let mut config = AppConfig::from_env();
    if let Some(path) = std::env::args_os().nth(1) {
        config = config.with_csv_path(path);
    }

    let report = stockpulse_cli::run(&config).context("inventory analysis failed")?;

    let stdout = std::io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &report).context("failed to write report")?;
    println!();

    Ok(())
}
