pub mod cli;
pub mod config;
pub mod cooldown;
pub mod dispatcher;
pub mod feed;
pub mod logging;
pub mod notifier;
pub mod spotter;
#[cfg(test)]
mod stub_server;
pub mod thread_manager;
pub mod types;
pub mod watchlist;
