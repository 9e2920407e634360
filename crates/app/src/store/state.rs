//! State slice held by the location store.

use staffdir_domain::location::Location;

/// In-memory mirror of the server's location data plus request-lifecycle
/// flags for UI consumption.
///
/// `loading` tracks reads, `updating` tracks writes; the two flows are
/// independent. `update_success` stays `true` after a completed write until
/// the next operation starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationState {
    /// Collection as of the last successful list fetch.
    pub entities: Vec<Location>,
    /// Most recently fetched/created/updated record; empty after a delete.
    pub entity: Location,
    /// A read is in flight.
    pub loading: bool,
    /// A write is in flight.
    pub updating: bool,
    /// Normalized message from the last failure, cleared on the next start.
    pub error_message: Option<String>,
    /// The last write completed successfully.
    pub update_success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_idle_and_empty() {
        let state = LocationState::default();
        assert!(state.entities.is_empty());
        assert!(state.entity.is_empty());
        assert!(!state.loading);
        assert!(!state.updating);
        assert!(state.error_message.is_none());
        assert!(!state.update_success);
    }
}
