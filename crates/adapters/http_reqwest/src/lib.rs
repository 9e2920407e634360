//! # staffdir-adapter-http-reqwest
//!
//! REST implementation of the location gateway port over `reqwest`.
//!
//! The adapter owns the wire concerns: URL layout, the cache-busting query
//! parameter, and normalizing transport failures and non-success responses
//! into the domain error shape. Everything above it only sees the
//! `LocationGateway` trait.

pub mod config;
pub mod error;
pub mod gateway;

pub use config::GatewayConfig;
pub use gateway::RestLocationGateway;
