//! Location — a postal address record served by the staff-directory service.
//!
//! The record shape is owned by the server; every field besides the
//! identifier is an optional free-form string, serialized camelCase on the
//! wire. Outgoing payloads are *cleaned*: empty-string fields are stripped
//! and `None` fields are omitted entirely.

use serde::{Deserialize, Serialize};

use crate::id::LocationId;

/// A single location record as the server serves it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    /// Server-assigned identifier; absent until the record is created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<LocationId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_province: Option<String>,
}

impl Location {
    /// Create a builder for constructing a [`Location`].
    #[must_use]
    pub fn builder() -> LocationBuilder {
        LocationBuilder::default()
    }

    /// Strip empty-string fields so they are absent from outgoing payloads.
    ///
    /// Combined with the skip-on-`None` serialization this guarantees the
    /// wire payload never carries empty-valued keys.
    #[must_use]
    pub fn clean(mut self) -> Self {
        for field in [
            &mut self.street_address,
            &mut self.postal_code,
            &mut self.city,
            &mut self.state_province,
        ] {
            if field.as_deref().is_some_and(str::is_empty) {
                *field = None;
            }
        }
        self
    }

    /// Whether every field, the identifier included, is absent.
    ///
    /// This is the single-entity reset value used after a delete.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.street_address.is_none()
            && self.postal_code.is_none()
            && self.city.is_none()
            && self.state_province.is_none()
    }
}

/// Step-by-step builder for [`Location`].
#[derive(Debug, Default)]
pub struct LocationBuilder {
    id: Option<LocationId>,
    street_address: Option<String>,
    postal_code: Option<String>,
    city: Option<String>,
    state_province: Option<String>,
}

impl LocationBuilder {
    #[must_use]
    pub fn id(mut self, id: LocationId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn street_address(mut self, value: impl Into<String>) -> Self {
        self.street_address = Some(value.into());
        self
    }

    #[must_use]
    pub fn postal_code(mut self, value: impl Into<String>) -> Self {
        self.postal_code = Some(value.into());
        self
    }

    #[must_use]
    pub fn city(mut self, value: impl Into<String>) -> Self {
        self.city = Some(value.into());
        self
    }

    #[must_use]
    pub fn state_province(mut self, value: impl Into<String>) -> Self {
        self.state_province = Some(value.into());
        self
    }

    /// Consume the builder and return the [`Location`].
    ///
    /// Every field is optional server-side, so construction is infallible.
    #[must_use]
    pub fn build(self) -> Location {
        Location {
            id: self.id,
            street_address: self.street_address,
            postal_code: self.postal_code,
            city: self.city,
            state_province: self.state_province,
        }
    }
}
