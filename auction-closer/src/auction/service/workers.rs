use {
    super::{
        close_auction::RunAuctionCloserInput,
        Service,
    },
    tracing::Instrument,
};

impl Service {
    /// Registers and spawns the closer for one auction. Returns false when no closer was
    /// spawned, either because one is already live for this auction or because the service
    /// is shutting down.
    pub async fn spawn_auction_closer(&self, input: RunAuctionCloserInput) -> bool {
        if self.closers.is_shutting_down() {
            tracing::warn!(
                auction_id = %input.auction_id,
                "Service is shutting down, auction closer not scheduled"
            );
            return false;
        }
        let Some(cancellation) = self.closers.register(input.auction_id).await else {
            tracing::warn!(
                auction_id = %input.auction_id,
                "Auction closer already scheduled, skipping duplicate"
            );
            return false;
        };

        let auction_id = input.auction_id;
        self.task_tracker.spawn({
            let service = self.clone();
            async move {
                let outcome = service.run_auction_closer(input, cancellation).await;
                service.closers.deregister(auction_id).await;
                tracing::debug!(outcome = ?outcome, "Auction closer finished");
            }
            .instrument(tracing::info_span!("auction_closer", auction_id = %auction_id))
        });
        true
    }

    /// Cancels every live closer and waits for all of them to finish.
    pub async fn shutdown(&self) {
        let live_closers = self.closers.cancel_all().await;
        tracing::info!(live_closers, "Shutting down auction closers...");
        self.task_tracker.close();
        self.task_tracker.wait().await;
        tracing::info!("All auction closers stopped");
    }
}
