//! Shared query infrastructure: the [`Query`] trait, [`SortOrder`], and the
//! parameter helpers every per-resource query uses.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::Error;

/// Smallest `limit` the API accepts.
pub const MIN_LIMIT: i64 = 1;
/// Largest `limit` the API accepts.
pub const MAX_LIMIT: i64 = 100;

/// Trait implemented by all query builders.
pub trait Query {
    /// Validates this query and appends its parameters to the given URL,
    /// returning the modified URL. Unset parameters are left out entirely.
    fn add_to_url(&self, url: &Url) -> Result<Url, Error>;
}

/// The empty query, for resources that take no parameters.
impl Query for () {
    fn add_to_url(&self, url: &Url) -> Result<Url, Error> {
        Ok(url.clone())
    }
}

/// Order in which events are returned.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first.
    Asc,
    /// Newest first.
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortOrder::Asc => "asc",
                SortOrder::Desc => "desc",
            }
        )
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => {
                tracing::warn!("Rejected sort order {:?}", s);
                Err(Error::InvalidSort {
                    sort: s.to_string(),
                    message: format!("sort must be \"asc\" or \"desc\", got {:?}", s),
                })
            }
        }
    }
}

pub(crate) fn validate_limit(limit: i64) -> Result<i64, Error> {
    if (MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
        Ok(limit)
    } else {
        tracing::warn!("Rejected limit {}", limit);
        Err(Error::InvalidLimit {
            limit,
            message: format!(
                "limit must be between {} and {} inclusive, got {}",
                MIN_LIMIT, MAX_LIMIT, limit
            ),
        })
    }
}

/// Joins `values` with commas into a single parameter. An empty list adds nothing.
pub(crate) fn append_list(url: &mut Url, name: &str, values: &[String]) {
    if !values.is_empty() {
        url.query_pairs_mut().append_pair(name, &values.join(","));
    }
}

/// Only `true` is ever sent; there is no way to send `verbose=false`.
pub(crate) fn append_verbose(url: &mut Url, verbose: bool) {
    if verbose {
        url.query_pairs_mut().append_pair("verbose", "true");
    }
}

pub(crate) fn append_limit(url: &mut Url, limit: Option<i64>) {
    if let Some(limit) = limit {
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
    }
}

pub(crate) fn push_all<S: AsRef<str>>(target: &mut Vec<String>, values: &[S]) {
    target.extend(values.iter().map(|v| v.as_ref().to_string()));
}
