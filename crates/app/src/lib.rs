//! # staffdir-app
//!
//! Application layer — the location store and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that transport adapters must implement:
//!   - `LocationGateway` — REST CRUD against the location endpoint
//! - Provide the **location store**: an in-memory mirror of server state
//!   with request-lifecycle flags, consumed by UIs and the CLI
//! - Publish state snapshots over an in-process watch channel
//!
//! ## Dependency rule
//! Depends on `staffdir-domain` only (plus `tokio::sync` for the snapshot
//! channel). Never imports adapter crates. Adapters depend on *this* crate,
//! not the reverse.

pub mod ports;
pub mod store;
