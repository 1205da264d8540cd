mod alert_controller;
mod demo;
pub mod feed;
mod feed_computer;
pub mod risk;
mod supervisor;
mod watchlist;
#[cfg(test)]
mod tests;

pub use alert_controller::{AlertController, AlertSink, ConsoleSink};
pub use feed_computer::FeedComputer;
pub use supervisor::Supervisor;
pub use watchlist::WatchlistController;
