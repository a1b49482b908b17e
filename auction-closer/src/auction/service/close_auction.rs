use {
    super::Service,
    crate::auction::{
        entities,
        repository::RepositoryError,
    },
    std::time::Duration,
    time::OffsetDateTime,
    tokio_util::sync::CancellationToken,
};

pub struct CloseAuctionInput {
    pub auction_id: entities::AuctionId,
}

#[derive(Clone, Debug)]
pub struct RunAuctionCloserInput {
    pub auction_id: entities::AuctionId,
    pub deadline:   OffsetDateTime,
}

/// Terminal state of a closer task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloserOutcome {
    /// The deadline passed. `transitioned` is false when the auction was no longer active.
    Closed { transitioned: bool },
    Cancelled,
    Failed,
}

fn remaining_until(deadline: OffsetDateTime, now: OffsetDateTime) -> Duration {
    Duration::try_from(deadline - now).unwrap_or(Duration::ZERO)
}

impl Service {
    /// Moves an active auction to completed. Returns false if it was not active anymore.
    pub async fn close_auction(&self, input: CloseAuctionInput) -> Result<bool, RepositoryError> {
        self.repo
            .update_auction_status(
                input.auction_id,
                entities::AuctionStatus::Active,
                entities::AuctionStatus::Completed,
            )
            .await
    }

    #[tracing::instrument(skip_all, fields(auction_id = %input.auction_id))]
    pub async fn run_auction_closer(
        &self,
        input: RunAuctionCloserInput,
        cancellation: CancellationToken,
    ) -> CloserOutcome {
        let remaining = remaining_until(input.deadline, OffsetDateTime::now_utc());
        tracing::debug!(auction_id = %input.auction_id, remaining = ?remaining, "Auction closer scheduled");

        tokio::select! {
            biased;
            _ = cancellation.cancelled() => {
                tracing::info!(
                    auction_id = %input.auction_id,
                    event = "cancelled",
                    "Closer for auction cancelled before expiration"
                );
                return CloserOutcome::Cancelled;
            }
            _ = tokio::time::sleep(remaining) => {}
        }

        match self
            .close_auction(CloseAuctionInput {
                auction_id: input.auction_id,
            })
            .await
        {
            Ok(true) => {
                tracing::info!(
                    auction_id = %input.auction_id,
                    event = "closed",
                    "Auction closed after expiration"
                );
                CloserOutcome::Closed { transitioned: true }
            }
            Ok(false) => {
                tracing::debug!(
                    auction_id = %input.auction_id,
                    "Auction was not active at expiration, nothing to close"
                );
                CloserOutcome::Closed {
                    transitioned: false,
                }
            }
            Err(e) => {
                tracing::error!(
                    auction_id = %input.auction_id,
                    event = "close_failed",
                    error = %e,
                    "Failed to close auction"
                );
                CloserOutcome::Failed
            }
        }
    }
}
