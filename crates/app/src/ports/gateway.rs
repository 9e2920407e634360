//! Gateway port — REST transport for location records.

use std::future::Future;

use staffdir_domain::error::StaffDirError;
use staffdir_domain::id::LocationId;
use staffdir_domain::location::Location;
use staffdir_domain::sort::SortSpec;

/// Transport boundary for the location endpoint.
///
/// Implementations issue exactly one HTTP request per call and normalize
/// every failure into [`StaffDirError`]. Payload cleaning is the caller's
/// concern; identifier routing is explicit (writes take the id as a typed
/// argument rather than re-reading it out of the record).
pub trait LocationGateway {
    /// Fetch the full list, optionally asking the server to sort.
    fn list(
        &self,
        sort: Option<&SortSpec>,
    ) -> impl Future<Output = Result<Vec<Location>, StaffDirError>> + Send;

    /// Fetch a single record by id.
    fn get(
        &self,
        id: LocationId,
    ) -> impl Future<Output = Result<Location, StaffDirError>> + Send;

    /// Create a new record; the server assigns the id.
    fn create(
        &self,
        location: Location,
    ) -> impl Future<Output = Result<Location, StaffDirError>> + Send;

    /// Replace an existing record.
    fn update(
        &self,
        id: LocationId,
        location: Location,
    ) -> impl Future<Output = Result<Location, StaffDirError>> + Send;

    /// Merge the given fields into an existing record.
    fn partial_update(
        &self,
        id: LocationId,
        location: Location,
    ) -> impl Future<Output = Result<Location, StaffDirError>> + Send;

    /// Delete a record by id.
    ///
    /// The server echoes the deleted record or an empty body; an empty body
    /// decodes to the empty record.
    fn delete(
        &self,
        id: LocationId,
    ) -> impl Future<Output = Result<Location, StaffDirError>> + Send;
}
