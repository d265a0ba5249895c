pub mod config;
pub mod error;
pub mod generator;
pub mod hub;
pub mod recipe;
pub mod server;

pub use error::{Error, Result};
