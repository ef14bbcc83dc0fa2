pub mod app_error;
pub mod config;
pub mod embed;
pub mod error;
pub mod tenor;
pub mod web;

pub use crate::config::AppConfig;
