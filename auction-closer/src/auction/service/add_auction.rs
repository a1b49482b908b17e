use {
    super::{
        close_auction::RunAuctionCloserInput,
        Service,
    },
    crate::auction::{
        entities,
        repository::RepositoryError,
    },
};

pub struct AddAuctionInput {
    pub auction: entities::AuctionCreate,
}

impl Service {
    /// Stores a new active auction and schedules its closer. The closer runs on the service's
    /// own task tracker, so it outlives the caller and is only stopped by shutdown.
    pub async fn add_auction(
        &self,
        input: AddAuctionInput,
    ) -> Result<entities::Auction, RepositoryError> {
        let auction = entities::Auction::new_with_current_time(input.auction);
        self.repo.add_auction(&auction).await.map_err(|e| {
            tracing::error!(
                auction_id = %auction.id,
                event = "insert_failed",
                error = %e,
                "Failed to add auction"
            );
            e
        })?;

        self.spawn_auction_closer(RunAuctionCloserInput {
            auction_id: auction.id,
            deadline:   auction.deadline(self.config.auction_duration),
        })
        .await;
        Ok(auction)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::auction::{
            entities::tests::auction_create,
            repository::{
                InMemoryDatabase,
                MockDatabase,
            },
        },
        std::time::Duration,
    };

    #[tokio::test]
    async fn test_add_auction_schedules_closer() {
        let service = Service::new_with_db(InMemoryDatabase::new(), Duration::from_secs(3600));
        let auction = service
            .add_auction(AddAuctionInput {
                auction: auction_create(),
            })
            .await
            .unwrap();

        assert_eq!(auction.status, entities::AuctionStatus::Active);
        assert_eq!(service.live_closers().await, 1);
        assert_eq!(
            service.repo.get_auction_by_id(auction.id).await.unwrap(),
            auction
        );
        service.shutdown().await;
    }

    #[tokio::test]
    async fn test_add_auction_when_insert_fails() {
        let mut db = MockDatabase::new();
        db.expect_add_auction()
            .times(1)
            .returning(|_| Err(RepositoryError::Storage("database is down".to_string())));
        db.expect_update_auction_status().never();
        let service = Service::new_with_db(db, Duration::from_millis(10));

        let result = service
            .add_auction(AddAuctionInput {
                auction: auction_create(),
            })
            .await;
        assert_eq!(
            result,
            Err(RepositoryError::Storage("database is down".to_string()))
        );
        assert_eq!(service.live_closers().await, 0);

        tokio::time::sleep(Duration::from_millis(50)).await;
        service.shutdown().await;
    }

    #[tokio::test]
    async fn test_add_auction_returns_before_closing() {
        let service = Service::new_with_db(InMemoryDatabase::new(), Duration::from_millis(200));
        let auction = tokio::time::timeout(
            Duration::from_millis(100),
            service.add_auction(AddAuctionInput {
                auction: auction_create(),
            }),
        )
        .await
        .unwrap()
        .unwrap();
        assert_eq!(
            service.repo.get_auction_by_id(auction.id).await.unwrap().status,
            entities::AuctionStatus::Active
        );
        service.shutdown().await;
    }
}
