use {
    super::{
        models,
        Repository,
        RepositoryError,
    },
    crate::auction::entities,
};

impl Repository {
    #[tracing::instrument(skip_all, name = "add_auction_repo", fields(auction_id = %auction.id))]
    pub async fn add_auction(&self, auction: &entities::Auction) -> Result<(), RepositoryError> {
        self.db.add_auction(&models::Auction::from(auction)).await
    }
}
