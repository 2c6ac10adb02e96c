//! whoisvoting - a REST API for voter registration records
//!
//! An in-memory record store (`registry`) behind an Axum HTTP layer
//! (`http_server`), started from the `cli`.

pub mod cli;
pub mod http_server;
pub mod logging;
pub mod registry;
