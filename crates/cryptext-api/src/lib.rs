//! Cryptext HTTP service
//!
//! Exposes the conversion dispatcher as `POST /convert`, speaking the JSON
//! shape of the original web front end.

pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod routes;
pub mod settings;

pub use error::{AppError, Result};
