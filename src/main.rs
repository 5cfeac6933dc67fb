use std::process::ExitCode;

use anyhow::{Context, Result};
use hunt_smoke::config::DEFAULT_CONFIG_FILE;
use hunt_smoke::logging;
use hunt_smoke::{SmokeConfig, SmokeTester};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize logging
    logging::init_from_env().map_err(|e| anyhow::anyhow!(e))?;

    let config = SmokeConfig::load_or_default(DEFAULT_CONFIG_FILE)
        .with_context(|| format!("loading {}", DEFAULT_CONFIG_FILE))?;

    let mut tester = SmokeTester::new(config, std::io::stdout())?;
    let outcome = tester.run().await?;

    Ok(ExitCode::from(&outcome))
}
