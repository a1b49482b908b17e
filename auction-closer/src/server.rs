use {
    crate::{
        auction::{
            repository::InMemoryDatabase,
            service::{
                Config,
                Service,
            },
        },
        config::{
            auction::DurationSource,
            RunOptions,
        },
        kernel::db,
    },
    anyhow::anyhow,
    tokio_util::{
        sync::CancellationToken,
        task::TaskTracker,
    },
};

pub async fn start_server(run_options: RunOptions) -> anyhow::Result<()> {
    // Cancelled once on ctrl-c. Every auction closer waits on a child of this token.
    let shutdown_token = CancellationToken::new();
    tokio::spawn({
        let shutdown_token = shutdown_token.clone();
        async move {
            tracing::info!("Registered shutdown signal handler...");
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!(error = ?err, "Failed to listen for the shutdown signal");
            }
            tracing::info!("Shut down signal received, waiting for tasks...");
            shutdown_token.cancel();
        }
    });

    let auction_duration = run_options.auction.duration_source().get();
    tracing::info!(auction_duration = ?auction_duration, "Resolved auction duration");
    let config = Config { auction_duration };
    let task_tracker = TaskTracker::new();

    let service = match run_options.server.database_url.as_deref() {
        Some(database_url) => {
            let pool = db::connect(database_url, run_options.server.database_max_connections)
                .await
                .map_err(|err| anyhow!("Failed to connect to the database: {:?}", err))?;
            tracing::info!("Connected to the database");
            Service::new(pool, config, task_tracker, shutdown_token.clone())
        }
        None => {
            tracing::warn!("No database url configured, auctions are kept in memory");
            Service::new(
                InMemoryDatabase::new(),
                config,
                task_tracker,
                shutdown_token.clone(),
            )
        }
    };

    shutdown_token.cancelled().await;
    service.shutdown().await;
    Ok(())
}
