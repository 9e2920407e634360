//! Location store — issues gateway calls and merges results into state.

use std::sync::{Mutex, PoisonError};

use tokio::sync::watch;

use staffdir_domain::error::{StaffDirError, ValidationError};
use staffdir_domain::id::LocationId;
use staffdir_domain::location::Location;
use staffdir_domain::sort::SortSpec;

use crate::ports::LocationGateway;
use crate::store::LocationState;

/// Client-side store for location records.
///
/// State is mutated only inside the lifecycle reducers below, never across
/// an await point; overlapping operations therefore resolve last-writer-wins
/// in completion order. There is no cancellation, no retry, and no
/// coalescing of refreshes. After every mutation a snapshot is published to
/// subscribers through a watch channel.
pub struct LocationStore<G> {
    gateway: G,
    state: Mutex<LocationState>,
    publisher: watch::Sender<LocationState>,
}

impl<G: LocationGateway> LocationStore<G> {
    /// Create a new store backed by the given gateway.
    #[must_use]
    pub fn new(gateway: G) -> Self {
        let (publisher, _) = watch::channel(LocationState::default());
        Self {
            gateway,
            state: Mutex::new(LocationState::default()),
            publisher,
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> LocationState {
        self.lock().clone()
    }

    /// Subscribe to state snapshots.
    ///
    /// The receiver observes every state published *after* the subscription
    /// is created, collapsed to the latest value.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LocationState> {
        self.publisher.subscribe()
    }

    /// Fetch the list and replace the collection, sorted client-side when a
    /// spec is given. Without a spec the server order is kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure; the same failure is mirrored into
    /// [`LocationState::error_message`].
    pub async fn refresh(&self, sort: Option<SortSpec>) -> Result<(), StaffDirError> {
        tracing::debug!(sort = ?sort, "fetching location list");
        self.begin_read();
        match self.gateway.list(sort.as_ref()).await {
            Ok(entities) => {
                self.merge_list(entities, sort.as_ref());
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Fetch a single record and replace the single-entity state.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure, mirrored into the state.
    pub async fn fetch_one(&self, id: LocationId) -> Result<Location, StaffDirError> {
        tracing::debug!(%id, "fetching location");
        self.begin_read();
        match self.gateway.get(id).await {
            Ok(entity) => {
                self.mutate(|state| {
                    state.loading = false;
                    state.entity = entity.clone();
                });
                Ok(entity)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Create a record from a cleaned payload, then run the follow-up
    /// unsorted list refresh every successful write triggers.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IdPresent`] when the record already
    /// carries an id, or the gateway failure.
    pub async fn create(&self, location: Location) -> Result<Location, StaffDirError> {
        tracing::debug!("creating location");
        self.begin_write();
        if location.id.is_some() {
            return Err(self.fail(ValidationError::IdPresent.into()));
        }
        match self.gateway.create(location.clean()).await {
            Ok(created) => {
                self.settle_write(created.clone()).await;
                Ok(created)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Replace a record with a cleaned payload, then refresh.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IdMissing`] when the record has no id,
    /// or the gateway failure.
    pub async fn update(&self, location: Location) -> Result<Location, StaffDirError> {
        tracing::debug!("updating location");
        self.begin_write();
        let Some(id) = location.id else {
            return Err(self.fail(ValidationError::IdMissing.into()));
        };
        match self.gateway.update(id, location.clean()).await {
            Ok(updated) => {
                self.settle_write(updated.clone()).await;
                Ok(updated)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Merge the set fields of a cleaned payload into a record, then refresh.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IdMissing`] when the record has no id,
    /// or the gateway failure.
    pub async fn partial_update(&self, location: Location) -> Result<Location, StaffDirError> {
        tracing::debug!("partially updating location");
        self.begin_write();
        let Some(id) = location.id else {
            return Err(self.fail(ValidationError::IdMissing.into()));
        };
        match self.gateway.partial_update(id, location.clean()).await {
            Ok(updated) => {
                self.settle_write(updated.clone()).await;
                Ok(updated)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Delete a record, clear the single-entity state, then refresh.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure, mirrored into the state.
    pub async fn delete(&self, id: LocationId) -> Result<(), StaffDirError> {
        tracing::debug!(%id, "deleting location");
        self.begin_write();
        match self.gateway.delete(id).await {
            Ok(_) => {
                self.settle_write(Location::default()).await;
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Restore the initial state.
    pub fn reset(&self) {
        self.mutate(|state| *state = LocationState::default());
    }

    /// Run the follow-up list refresh, then apply the write merge.
    ///
    /// The refresh starts (flipping the read flags) before the write merge
    /// lands, so `update_success` ends up `true` once everything settles —
    /// the write merge is the later reducer. A refresh failure goes through
    /// the shared failure path and only surfaces in the state.
    async fn settle_write(&self, entity: Location) {
        self.begin_read();
        let listed = self.gateway.list(None).await;
        self.mutate(|state| {
            state.updating = false;
            state.loading = false;
            state.update_success = true;
            state.entity = entity;
        });
        match listed {
            Ok(entities) => self.merge_list(entities, None),
            Err(err) => {
                self.fail(err);
            }
        }
    }

    // Lifecycle reducers. Every state transition in the store goes through
    // one of these; they are the only places the mutex is taken.

    fn begin_read(&self) {
        self.mutate(|state| {
            state.error_message = None;
            state.update_success = false;
            state.loading = true;
        });
    }

    fn begin_write(&self) {
        self.mutate(|state| {
            state.error_message = None;
            state.update_success = false;
            state.updating = true;
        });
    }

    fn merge_list(&self, mut entities: Vec<Location>, sort: Option<&SortSpec>) {
        if let Some(spec) = sort {
            entities.sort_by(|a, b| spec.compare(a, b));
        }
        self.mutate(|state| {
            state.loading = false;
            state.entities = entities;
        });
    }

    /// Shared failure path: record the normalized message and drop every
    /// in-flight flag. No failure kind is special-cased.
    fn fail(&self, err: StaffDirError) -> StaffDirError {
        tracing::error!(error = %err, "location request failed");
        self.mutate(|state| {
            state.error_message = Some(err.to_string());
            state.loading = false;
            state.updating = false;
            state.update_success = false;
        });
        err
    }

    fn mutate(&self, apply: impl FnOnce(&mut LocationState)) {
        let snapshot = {
            let mut state = self.lock();
            apply(&mut state);
            state.clone()
        };
        let _ = self.publisher.send_replace(snapshot);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LocationState> {
        // Reducers are straight-line field assignments; a poisoned guard
        // still holds a coherent state.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
