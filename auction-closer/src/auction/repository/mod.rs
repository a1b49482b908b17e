mod add_auction;
mod error;
mod get_auction_by_id;
mod in_memory;
mod models;
mod update_auction_status;

pub use {
    error::*,
    in_memory::*,
    models::*,
};

#[derive(Debug)]
pub struct Repository {
    pub db: Box<dyn Database>,
}

impl Repository {
    pub fn new(db: impl Database) -> Self {
        Self { db: Box::new(db) }
    }
}
