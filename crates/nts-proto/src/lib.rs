//! Shared core of the NTS terminal client: API types, the HTTP client,
//! schedule shaping, mixtape lookup and configuration.

pub mod client;
pub mod config;
pub mod error;
pub mod mixtape;
pub mod model;
pub mod platform;
pub mod schedule;
pub mod streams;
