//! Location store — client-side state slice mirroring the server.

pub mod location_store;
pub mod state;

pub use location_store::LocationStore;
pub use state::LocationState;
