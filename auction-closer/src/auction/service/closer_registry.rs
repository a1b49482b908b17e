use {
    crate::auction::entities::AuctionId,
    std::collections::{
        hash_map::Entry,
        HashMap,
    },
    tokio::sync::Mutex,
    tokio_util::sync::CancellationToken,
};

/// Live closer tasks keyed by auction id. Every closer runs with a child of the process
/// shutdown token, so cancelling the root reaches all of them at once.
#[derive(Debug)]
pub struct CloserRegistry {
    shutdown_token: CancellationToken,
    closers:        Mutex<HashMap<AuctionId, CancellationToken>>,
}

impl CloserRegistry {
    pub fn new(shutdown_token: CancellationToken) -> Self {
        Self {
            shutdown_token,
            closers: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cancellation token for a new closer, or `None` if this auction already
    /// has a live one.
    pub async fn register(&self, auction_id: AuctionId) -> Option<CancellationToken> {
        match self.closers.lock().await.entry(auction_id) {
            Entry::Occupied(_) => None,
            Entry::Vacant(entry) => {
                let token = self.shutdown_token.child_token();
                entry.insert(token.clone());
                Some(token)
            }
        }
    }

    pub async fn deregister(&self, auction_id: AuctionId) {
        self.closers.lock().await.remove(&auction_id);
    }

    pub async fn len(&self) -> usize {
        self.closers.lock().await.len()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown_token.is_cancelled()
    }

    /// Cancels the shutdown token and every registered closer. Returns how many closers were
    /// still registered.
    pub async fn cancel_all(&self) -> usize {
        self.shutdown_token.cancel();
        let closers = self.closers.lock().await;
        closers.values().for_each(CancellationToken::cancel);
        closers.len()
    }
}
