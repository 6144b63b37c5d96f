use std::sync::Arc;

use anyhow::Context;
use folio_core::activities::{
    import_trading212_csv, summarize_trades, summarize_transfers, Trade, Transfer,
};
use folio_core::portfolio::DashboardOverview;
use folio_core::session::{FileSessionStore, SessionContext, SessionStore};
use folio_core::sources::{JsonSnapshotSource, LoadedViews, PortfolioLoader};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, OutputFormat};
use crate::report;

pub struct AppState {
    pub config: Config,
    pub session: SessionContext,
    pub source: Arc<JsonSnapshotSource>,
    pub loader: PortfolioLoader,
    /// Activities from the optional CSV import, read once at startup
    pub imported_trades: Vec<Trade>,
    pub imported_transfers: Vec<Transfer>,
}

pub fn init_tracing() {
    let log_format = std::env::var("FOLIO_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Clears the stored session.
pub fn sign_out(config: &Config) -> anyhow::Result<()> {
    let store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(&config.session_path));
    let mut session = SessionContext::initialize(store)?;
    session.sign_out()?;
    println!("Signed out");
    Ok(())
}

pub async fn build_state(config: Config) -> anyhow::Result<Arc<AppState>> {
    let store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(&config.session_path));
    let session = SessionContext::initialize(store)?;
    match session.current() {
        Some(s) => tracing::info!("Signed in as {}", s.username),
        None => tracing::info!("No stored session, loading anonymously"),
    }

    let source = Arc::new(
        JsonSnapshotSource::from_path(&config.snapshot_path)
            .await
            .with_context(|| {
                format!("Failed to read snapshot {}", config.snapshot_path.display())
            })?,
    );
    tracing::info!("Snapshot path in use: {}", config.snapshot_path.display());
    let loader = PortfolioLoader::new(source.clone());

    let (imported_trades, imported_transfers) = match &config.import_csv {
        Some((path, portfolio_id)) => {
            let content = tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let imported = import_trading212_csv(&content, portfolio_id)?;
            for row in &imported.errors {
                tracing::warn!("Skipped CSV row {}: {}", row.row_index + 1, row.message);
            }
            tracing::info!(
                "Imported {} trades and {} transfers from {} ({} rows skipped)",
                imported.trades.len(),
                imported.transfers.len(),
                path.display(),
                imported.skipped_rows
            );
            (imported.trades, imported.transfers)
        }
        None => (Vec::new(), Vec::new()),
    };

    Ok(Arc::new(AppState {
        config,
        session,
        source,
        loader,
        imported_trades,
        imported_transfers,
    }))
}

/// Loads every portfolio and writes one dashboard render to stdout.
pub async fn render_dashboard(state: &AppState) -> anyhow::Result<()> {
    let LoadedViews {
        summaries,
        views,
        failures,
    } = state.loader.load_views(&state.session).await?;
    if !failures.is_empty() {
        tracing::warn!("{} portfolio fetches failed", failures.len());
    }

    let overview = DashboardOverview::build(&summaries, &state.config.display);

    let snapshot = state.source.snapshot()?;
    let mut trades = snapshot.trades;
    trades.extend(state.imported_trades.iter().cloned());
    let mut transfers = snapshot.transfers;
    transfers.extend(state.imported_transfers.iter().cloned());
    let trade_summary = summarize_trades(&trades);
    let transfer_summary = summarize_transfers(&transfers);

    let output = match state.config.output {
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "overview": overview,
            "views": views,
            "failures": failures,
            "trades": trade_summary,
            "transfers": transfer_summary,
        }))?,
        OutputFormat::Text => {
            let mut out = report::render_overview(&overview);
            out.push_str(&report::render_views(&views, &overview.currency_symbol));
            out.push_str(&report::render_failures(&failures));
            out.push_str(&report::render_activity(
                &trade_summary,
                &transfer_summary,
                &overview.currency_symbol,
            ));
            out
        }
    };
    println!("{}", output);
    Ok(())
}
