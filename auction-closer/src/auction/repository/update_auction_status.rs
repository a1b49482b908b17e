use {
    super::{
        Repository,
        RepositoryError,
    },
    crate::auction::entities,
};

impl Repository {
    /// Compare-and-set on the auction status. `Ok(false)` means the stored status was not
    /// `expected_status` (or the auction does not exist) and nothing was written.
    #[tracing::instrument(skip_all, name = "update_auction_status_repo", fields(auction_id, expected_status, new_status))]
    pub async fn update_auction_status(
        &self,
        auction_id: entities::AuctionId,
        expected_status: entities::AuctionStatus,
        new_status: entities::AuctionStatus,
    ) -> Result<bool, RepositoryError> {
        let span = tracing::Span::current();
        span.record("auction_id", auction_id.to_string());
        span.record("expected_status", expected_status.to_string());
        span.record("new_status", new_status.to_string());
        self.db
            .update_auction_status(auction_id, expected_status.into(), new_status.into())
            .await
    }
}
