// Crate root library declaration and module exports.
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;

pub use error::{EventError, EventResult};
pub use store::{Deletion, EventStore, StoreOptions};
