mod config;
mod main_lib;
mod report;
mod scheduler;

use config::Config;
use main_lib::{build_state, init_tracing, render_dashboard, sign_out};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();

    match std::env::args().nth(1).as_deref() {
        None | Some("dashboard") => {}
        Some("sign-out") => return sign_out(&config),
        Some(other) => anyhow::bail!("Unknown command '{}': expected dashboard or sign-out", other),
    }

    let refresh_interval = config.refresh_interval;
    let state = build_state(config).await?;

    let Some(period) = refresh_interval else {
        return render_dashboard(&state).await;
    };

    let handle = scheduler::start_refresh_scheduler(state, period)?;
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");
    handle.shutdown().await?;
    Ok(())
}
