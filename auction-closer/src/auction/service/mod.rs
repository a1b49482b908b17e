use {
    super::repository::{
        Database,
        Repository,
    },
    closer_registry::CloserRegistry,
    std::{
        sync::Arc,
        time::Duration,
    },
    tokio_util::{
        sync::CancellationToken,
        task::TaskTracker,
    },
};

pub mod add_auction;
pub mod close_auction;
pub mod closer_registry;
pub mod get_auction_by_id;
pub mod workers;

#[derive(Clone, Debug)]
pub struct Config {
    /// Resolved once at startup. Closers never read configuration themselves.
    pub auction_duration: Duration,
}

#[derive(Debug)]
pub struct ServiceInner {
    config:       Config,
    repo:         Arc<Repository>,
    task_tracker: TaskTracker,
    closers:      CloserRegistry,
}

#[derive(Clone, Debug)]
pub struct Service(Arc<ServiceInner>);
impl std::ops::Deref for Service {
    type Target = ServiceInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Service {
    pub fn new(
        db: impl Database,
        config: Config,
        task_tracker: TaskTracker,
        shutdown_token: CancellationToken,
    ) -> Self {
        Self(Arc::new(ServiceInner {
            config,
            repo: Arc::new(Repository::new(db)),
            task_tracker,
            closers: CloserRegistry::new(shutdown_token),
        }))
    }

    /// Number of closers that are scheduled and have not finished yet.
    pub async fn live_closers(&self) -> usize {
        self.closers.len().await
    }
}

#[cfg(test)]
pub mod tests {
    use {
        super::{
            Config,
            Service,
        },
        crate::auction::repository::Database,
        std::time::Duration,
        tokio_util::{
            sync::CancellationToken,
            task::TaskTracker,
        },
    };

    impl Service {
        pub fn new_with_db(db: impl Database, auction_duration: Duration) -> Self {
            Service::new(
                db,
                Config { auction_duration },
                TaskTracker::new(),
                CancellationToken::new(),
            )
        }
    }
}
