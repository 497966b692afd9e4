use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Context;
use log::info;
use tf_max::{corpus, select_max, write_report, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::from_reader(io::stdin().lock()).context("failed to read input")?;
    info!(
        "scoring {} target words in {}",
        config.targets.len(),
        config.directory.display()
    );

    let scans = corpus::scan_concurrent(&config.directory, Arc::new(config.targets)).await?;
    let results = select_max(scans);
    info!("found {} of the target words", results.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &results)?;
    out.flush()?;
    Ok(())
}
