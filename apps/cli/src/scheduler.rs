//! Background dashboard refresh.

use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use folio_core::polling::{PollHandle, PollTask};

use crate::main_lib::{render_dashboard, AppState};

/// Starts the periodic refresh. The loop lives as long as the returned handle.
pub fn start_refresh_scheduler(
    state: Arc<AppState>,
    period: Duration,
) -> anyhow::Result<PollHandle> {
    let handle = PollTask::spawn("dashboard-refresh", period, move || {
        let state = state.clone();
        async move { run_scheduled_refresh(&state).await }
    })?;
    info!("Dashboard refresh scheduled every {}s", period.as_secs());
    Ok(handle)
}

async fn run_scheduled_refresh(state: &AppState) {
    if let Err(e) = render_dashboard(state).await {
        warn!("Scheduled refresh failed: {:#}", e);
    }
}
