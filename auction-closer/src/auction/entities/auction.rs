use {
    std::{
        fmt,
        time::Duration,
    },
    time::OffsetDateTime,
    uuid::Uuid,
};

pub type AuctionId = Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuctionStatus {
    Active,
    Completed,
    Cancelled,
}

impl AuctionStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, AuctionStatus::Active)
    }
}

impl fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuctionStatus::Active => write!(f, "active"),
            AuctionStatus::Completed => write!(f, "completed"),
            AuctionStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductCondition {
    New,
    Used,
    Refurbished,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuctionCreate {
    pub product_name: String,
    pub category:     String,
    pub description:  String,
    pub condition:    ProductCondition,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Auction {
    pub id:            AuctionId,
    pub product_name:  String,
    pub category:      String,
    pub description:   String,
    pub condition:     ProductCondition,
    pub status:        AuctionStatus,
    pub creation_time: OffsetDateTime,
}

impl Auction {
    pub fn new_with_current_time(auction: AuctionCreate) -> Self {
        Self {
            id:            Uuid::new_v4(),
            product_name:  auction.product_name,
            category:      auction.category,
            description:   auction.description,
            condition:     auction.condition,
            status:        AuctionStatus::Active,
            creation_time: OffsetDateTime::now_utc(),
        }
    }

    /// The moment this auction should be closed, measured from its creation and not from
    /// whenever its closer happened to be scheduled.
    pub fn deadline(&self, duration: Duration) -> OffsetDateTime {
        self.creation_time + duration
    }
}
