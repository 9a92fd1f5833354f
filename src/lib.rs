pub mod config;
pub mod error;
pub mod handler;
pub mod notifier;
pub mod telegram;
pub mod utils;
