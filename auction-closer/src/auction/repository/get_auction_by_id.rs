use {
    super::{
        Repository,
        RepositoryError,
    },
    crate::auction::entities,
};

impl Repository {
    pub async fn get_auction_by_id(
        &self,
        auction_id: entities::AuctionId,
    ) -> Result<entities::Auction, RepositoryError> {
        let auction = self.db.get_auction(auction_id).await?;
        Ok(auction.get_auction_entity())
    }
}
