#[cfg(test)]
use mockall::automock;
use {
    super::RepositoryError,
    crate::{
        auction::entities,
        kernel::db::DB,
    },
    async_trait::async_trait,
    sqlx::FromRow,
    std::fmt::Debug,
    time::{
        PrimitiveDateTime,
        UtcOffset,
    },
    tracing::instrument,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "auction_status", rename_all = "lowercase")]
pub enum AuctionStatus {
    Active,
    Completed,
    Cancelled,
}

impl From<entities::AuctionStatus> for AuctionStatus {
    fn from(status: entities::AuctionStatus) -> Self {
        match status {
            entities::AuctionStatus::Active => AuctionStatus::Active,
            entities::AuctionStatus::Completed => AuctionStatus::Completed,
            entities::AuctionStatus::Cancelled => AuctionStatus::Cancelled,
        }
    }
}

impl From<AuctionStatus> for entities::AuctionStatus {
    fn from(status: AuctionStatus) -> Self {
        match status {
            AuctionStatus::Active => entities::AuctionStatus::Active,
            AuctionStatus::Completed => entities::AuctionStatus::Completed,
            AuctionStatus::Cancelled => entities::AuctionStatus::Cancelled,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "product_condition", rename_all = "lowercase")]
pub enum ProductCondition {
    New,
    Used,
    Refurbished,
}

impl From<entities::ProductCondition> for ProductCondition {
    fn from(condition: entities::ProductCondition) -> Self {
        match condition {
            entities::ProductCondition::New => ProductCondition::New,
            entities::ProductCondition::Used => ProductCondition::Used,
            entities::ProductCondition::Refurbished => ProductCondition::Refurbished,
        }
    }
}

impl From<ProductCondition> for entities::ProductCondition {
    fn from(condition: ProductCondition) -> Self {
        match condition {
            ProductCondition::New => entities::ProductCondition::New,
            ProductCondition::Used => entities::ProductCondition::Used,
            ProductCondition::Refurbished => entities::ProductCondition::Refurbished,
        }
    }
}

#[derive(Clone, FromRow, Debug, PartialEq, Eq)]
pub struct Auction {
    pub id:            entities::AuctionId,
    pub product_name:  String,
    pub category:      String,
    pub description:   String,
    pub condition:     ProductCondition,
    pub status:        AuctionStatus,
    pub creation_time: PrimitiveDateTime,
}

impl From<&entities::Auction> for Auction {
    fn from(auction: &entities::Auction) -> Self {
        let creation_time = auction.creation_time.to_offset(UtcOffset::UTC);
        Self {
            id:            auction.id,
            product_name:  auction.product_name.clone(),
            category:      auction.category.clone(),
            description:   auction.description.clone(),
            condition:     auction.condition.into(),
            status:        auction.status.into(),
            creation_time: PrimitiveDateTime::new(creation_time.date(), creation_time.time()),
        }
    }
}

impl Auction {
    pub fn get_auction_entity(&self) -> entities::Auction {
        entities::Auction {
            id:            self.id,
            product_name:  self.product_name.clone(),
            category:      self.category.clone(),
            description:   self.description.clone(),
            condition:     self.condition.into(),
            status:        self.status.into(),
            creation_time: self.creation_time.assume_offset(UtcOffset::UTC),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Database: Debug + Send + Sync + 'static {
    async fn add_auction(&self, auction: &Auction) -> Result<(), RepositoryError>;
    /// Moves the auction to `new_status` only if its stored status is still `expected_status`.
    /// Returns whether a row matched.
    async fn update_auction_status(
        &self,
        auction_id: entities::AuctionId,
        expected_status: AuctionStatus,
        new_status: AuctionStatus,
    ) -> Result<bool, RepositoryError>;
    async fn get_auction(&self, auction_id: entities::AuctionId)
        -> Result<Auction, RepositoryError>;
}

#[async_trait]
impl Database for DB {
    #[instrument(
        name = "db_add_auction",
        fields(category = "db_queries", result = "success", auction_id = %auction.id),
        skip_all
    )]
    async fn add_auction(&self, auction: &Auction) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO auction (id, product_name, category, description, condition, status, creation_time) VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(auction.id)
        .bind(&auction.product_name)
        .bind(&auction.category)
        .bind(&auction.description)
        .bind(auction.condition)
        .bind(auction.status)
        .bind(auction.creation_time)
        .execute(self)
        .await
        .map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!(error = e.to_string(), "DB: Failed to insert auction");
            RepositoryError::Storage(e.to_string())
        })?;
        Ok(())
    }

    #[instrument(
        name = "db_update_auction_status",
        fields(category = "db_queries", result = "success", auction_id = %auction_id),
        skip_all
    )]
    async fn update_auction_status(
        &self,
        auction_id: entities::AuctionId,
        expected_status: AuctionStatus,
        new_status: AuctionStatus,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query("UPDATE auction SET status = $1 WHERE id = $2 AND status = $3")
            .bind(new_status)
            .bind(auction_id)
            .bind(expected_status)
            .execute(self)
            .await
            .map_err(|e| {
                tracing::Span::current().record("result", "error");
                RepositoryError::Storage(e.to_string())
            })?;
        Ok(result.rows_affected() > 0)
    }

    #[instrument(
        name = "db_get_auction",
        fields(category = "db_queries", result = "success", auction_id = %auction_id),
        skip_all
    )]
    async fn get_auction(
        &self,
        auction_id: entities::AuctionId,
    ) -> Result<Auction, RepositoryError> {
        sqlx::query_as("SELECT * FROM auction WHERE id = $1")
            .bind(auction_id)
            .fetch_one(self)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => RepositoryError::NotFound,
                _ => {
                    tracing::Span::current().record("result", "error");
                    tracing::error!(
                        error = e.to_string(),
                        auction_id = auction_id.to_string(),
                        "Failed to get auction from db"
                    );
                    RepositoryError::Storage(e.to_string())
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::auction::entities::tests::auction_create,
    };

    #[test]
    fn test_auction_model_roundtrip_keeps_utc_creation_time() {
        let auction = entities::Auction::new_with_current_time(auction_create());
        let model = Auction::from(&auction);
        assert_eq!(model.status, AuctionStatus::Active);
        assert_eq!(model.condition, ProductCondition::Used);
        assert_eq!(model.get_auction_entity(), auction);
    }

    #[test]
    fn test_auction_model_normalizes_offset_to_utc() {
        let mut auction = entities::Auction::new_with_current_time(auction_create());
        let utc_time = auction.creation_time;
        auction.creation_time = utc_time.to_offset(UtcOffset::from_hms(2, 0, 0).unwrap());
        let model = Auction::from(&auction);
        assert_eq!(
            model.get_auction_entity().creation_time,
            utc_time.to_offset(UtcOffset::UTC)
        );
    }
}
