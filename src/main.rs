//! Policy Cache - command script runner
//!
//! Reads cache commands from stdin and replays them against the configured
//! eviction policy.

use std::io;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use policy_cache::{Config, ScriptRunner};

/// Main entry point for the script runner.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber (stderr, so stdout carries only results)
/// 2. Load configuration from environment variables
/// 3. Build the cache for the configured policy
/// 4. Replay stdin line by line
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "policy_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    info!(
        "Configuration loaded: policy={}, max_items={}",
        config.policy, config.max_items
    );

    let cache = config.build_cache::<String, String>();
    let mut runner = ScriptRunner::new(cache, io::stdout().lock());
    let executed = runner
        .run(io::stdin().lock())
        .context("failed to run command script")?;

    info!("Script finished: {} commands executed", executed);
    Ok(())
}
