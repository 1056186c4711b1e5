//! HTTP passthrough service for marketstack market data.
//!
//! Every route is a 1:1 relay of one upstream endpoint: read the query
//! parameters, call [`marketstack_api::Client`], return the decoded JSON.

pub mod error;
pub mod handlers;
pub mod server;

pub use server::{router, AppState, Server, ServerConfig};
