//! Employee onboarding - Entry point.

use anyhow::Context;
use employee_client::EmployeeClient;
use employee_onboarding::{AppResult, Config, Console, FlowOutcome, Navigator, Route, Shell};
use std::sync::Arc;
use tokio::io::{stdin, stdout, BufReader};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.log.level);

    let start: Route = config.flow.start_route.parse()?;

    let client = EmployeeClient::new(&config.api.base_url, config.api.timeout)?
        .with_query_encoding(config.api.query_encoding);

    info!(
        base_url = %client.base_url(),
        start = %start,
        "Starting employee onboarding"
    );

    let console = Console::new(BufReader::new(stdin()), stdout());
    let navigator = Navigator::open(start, config.flow.guard_direct_entry);
    let mut shell = Shell::new(Arc::new(client), console, navigator);

    tokio::select! {
        outcome = shell.run() => {
            match outcome? {
                FlowOutcome::Completed(_) => info!("Flow completed"),
                FlowOutcome::Abandoned(route) => info!(route = %route, "Flow abandoned"),
            }
        }
        _ = signal::ctrl_c() => {
            warn!("Interrupted");
        }
    }

    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
