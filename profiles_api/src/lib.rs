//! Client for the Segment Profile API.
//!
//! A [`ProfileClient`] reads the traits, events, external ids, metadata and
//! links of a single profile in a namespace and hands back the decoded JSON.

mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{ProfileClient, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::query::{
    EventsQuery, ExternalIdsQuery, MetadataQuery, Query, SortOrder, TraitsQuery, MAX_LIMIT,
    MIN_LIMIT,
};
pub use self::types::{ProfileId, Resource};
