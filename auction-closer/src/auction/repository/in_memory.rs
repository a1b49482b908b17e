use {
    super::{
        models::{
            Auction,
            AuctionStatus,
            Database,
        },
        RepositoryError,
    },
    crate::auction::entities::AuctionId,
    async_trait::async_trait,
    std::collections::HashMap,
    tokio::sync::RwLock,
};

/// Process-local auction storage, used when no database is configured.
/// Every write happens under a single lock, so the status update is atomic.
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    auctions: RwLock<HashMap<AuctionId, Auction>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Database for InMemoryDatabase {
    async fn add_auction(&self, auction: &Auction) -> Result<(), RepositoryError> {
        let mut auctions = self.auctions.write().await;
        if auctions.contains_key(&auction.id) {
            return Err(RepositoryError::Storage(format!(
                "auction {} already exists",
                auction.id
            )));
        }
        auctions.insert(auction.id, auction.clone());
        Ok(())
    }

    async fn update_auction_status(
        &self,
        auction_id: AuctionId,
        expected_status: AuctionStatus,
        new_status: AuctionStatus,
    ) -> Result<bool, RepositoryError> {
        let mut auctions = self.auctions.write().await;
        match auctions.get_mut(&auction_id) {
            Some(auction) if auction.status == expected_status => {
                auction.status = new_status;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn get_auction(&self, auction_id: AuctionId) -> Result<Auction, RepositoryError> {
        self.auctions
            .read()
            .await
            .get(&auction_id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::auction::entities::{
            self,
            tests::auction_create,
        },
        uuid::Uuid,
    };

    fn new_auction_model() -> Auction {
        Auction::from(&entities::Auction::new_with_current_time(
            auction_create(),
        ))
    }

    #[tokio::test]
    async fn test_add_and_get_auction() {
        let db = InMemoryDatabase::new();
        let auction = new_auction_model();
        db.add_auction(&auction).await.unwrap();
        assert_eq!(db.get_auction(auction.id).await.unwrap(), auction);
    }

    #[tokio::test]
    async fn test_add_duplicate_auction_fails() {
        let db = InMemoryDatabase::new();
        let auction = new_auction_model();
        db.add_auction(&auction).await.unwrap();
        assert!(matches!(
            db.add_auction(&auction).await,
            Err(RepositoryError::Storage(_))
        ));
    }

    #[tokio::test]
    async fn test_get_missing_auction() {
        let db = InMemoryDatabase::new();
        assert_eq!(
            db.get_auction(Uuid::new_v4()).await,
            Err(RepositoryError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_update_auction_status_requires_expected_status() {
        let db = InMemoryDatabase::new();
        let auction = new_auction_model();
        db.add_auction(&auction).await.unwrap();

        assert!(db
            .update_auction_status(auction.id, AuctionStatus::Active, AuctionStatus::Completed)
            .await
            .unwrap());
        assert!(!db
            .update_auction_status(auction.id, AuctionStatus::Active, AuctionStatus::Completed)
            .await
            .unwrap());
        assert!(!db
            .update_auction_status(auction.id, AuctionStatus::Active, AuctionStatus::Active)
            .await
            .unwrap());
        assert_eq!(
            db.get_auction(auction.id).await.unwrap().status,
            AuctionStatus::Completed
        );
    }

    #[tokio::test]
    async fn test_update_missing_auction_does_not_match() {
        let db = InMemoryDatabase::new();
        assert!(!db
            .update_auction_status(
                Uuid::new_v4(),
                AuctionStatus::Active,
                AuctionStatus::Completed
            )
            .await
            .unwrap());
    }
}
