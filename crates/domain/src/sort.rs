//! Sort model — typed field enumeration, direction, and comparator.
//!
//! The wire form is `sort=<field>,<direction>` with camelCase field names.
//! Field access is an explicit enumeration rather than name-keyed lookup,
//! so an unknown field is a parse error, not a silent no-op.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::location::Location;

/// Fields a location list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    StreetAddress,
    PostalCode,
    City,
    StateProvince,
}

impl SortField {
    /// Wire name of the field, as it appears in the query string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::StreetAddress => "streetAddress",
            Self::PostalCode => "postalCode",
            Self::City => "city",
            Self::StateProvince => "stateProvince",
        }
    }

    /// Compare two records on this field.
    ///
    /// The identifier compares numerically, everything else
    /// lexicographically; absent values order before present ones.
    #[must_use]
    pub fn compare(self, a: &Location, b: &Location) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::StreetAddress => a.street_address.as_deref().cmp(&b.street_address.as_deref()),
            Self::PostalCode => a.postal_code.as_deref().cmp(&b.postal_code.as_deref()),
            Self::City => a.city.as_deref().cmp(&b.city.as_deref()),
            Self::StateProvince => a.state_province.as_deref().cmp(&b.state_province.as_deref()),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "streetAddress" => Ok(Self::StreetAddress),
            "postalCode" => Ok(Self::PostalCode),
            "city" => Ok(Self::City),
            "stateProvince" => Ok(Self::StateProvince),
            other => Err(SortError::UnknownField(other.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(SortError::UnknownDirection(other.to_string())),
        }
    }
}

/// A complete sort request: field plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Construct a spec from its parts.
    #[must_use]
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Compare two records under this spec.
    ///
    /// A proper total order: equal keys compare `Equal`, and `desc` is the
    /// exact mirror of `asc`.
    #[must_use]
    pub fn compare(&self, a: &Location, b: &Location) -> Ordering {
        let ordering = self.field.compare(a, b);
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field, self.direction)
    }
}

impl FromStr for SortSpec {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = s
            .split_once(',')
            .ok_or_else(|| SortError::Malformed(s.to_string()))?;
        Ok(Self {
            field: field.parse()?,
            direction: direction.parse()?,
        })
    }
}

/// Errors from parsing a sort specification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    /// Input was not of the form `field,direction`.
    #[error("sort spec must be `field,direction`, got `{0}`")]
    Malformed(String),
    /// The field name is not sortable.
    #[error("unknown sort field `{0}`")]
    UnknownField(String),
    /// The direction was neither `asc` nor `desc`.
    #[error("unknown sort direction `{0}`, expected `asc` or `desc`")]
    UnknownDirection(String),
}
