use {
    super::Service,
    crate::auction::{
        entities,
        repository::RepositoryError,
    },
};

pub struct GetAuctionByIdInput {
    pub auction_id: entities::AuctionId,
}

impl Service {
    pub async fn get_auction_by_id(
        &self,
        input: GetAuctionByIdInput,
    ) -> Result<entities::Auction, RepositoryError> {
        self.repo.get_auction_by_id(input.auction_id).await
    }
}
