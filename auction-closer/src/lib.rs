//! Automatic auction closing.
//!
//! Every auction created through [`auction::service::Service::add_auction`] gets one closer
//! task that moves it from active to completed once the configured duration has elapsed since
//! its creation. Closers are cancelled together when the process shuts down.

pub mod auction;
pub mod config;
pub mod kernel;
pub mod server;
