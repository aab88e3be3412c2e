use chrono::{DateTime, SecondsFormat, Utc};
use url::Url;

use super::{
    common::{append_limit, append_list, push_all, validate_limit},
    Query, SortOrder,
};
use crate::Error;

/// Parameters for reading a profile's event history.
#[derive(Default, Clone, Debug)]
pub struct EventsQuery {
    /// Event names to return.
    pub include: Vec<String>,
    /// Event names to leave out.
    pub exclude: Vec<String>,
    /// Only events at or after this instant.
    pub start: Option<DateTime<Utc>>,
    /// Only events before this instant.
    pub end: Option<DateTime<Utc>>,
    /// Maximum number of events, 1 to 100.
    pub limit: Option<i64>,
    /// `asc` or `desc`. Kept as a string so bad input from callers is reported
    /// with the value they passed; empty counts as unset.
    pub sort: Option<String>,
}

impl Query for EventsQuery {
    fn add_to_url(&self, url: &Url) -> Result<Url, Error> {
        let limit = self.limit.map(validate_limit).transpose()?;
        let sort = match self.sort.as_deref() {
            None | Some("") => None,
            Some(sort) => Some(sort.parse::<SortOrder>()?),
        };

        let mut url = url.clone();
        append_list(&mut url, "include", &self.include);
        append_list(&mut url, "exclude", &self.exclude);
        if let Some(start) = &self.start {
            url.query_pairs_mut()
                .append_pair("start", &format_timestamp(start));
        }
        if let Some(end) = &self.end {
            url.query_pairs_mut()
                .append_pair("end", &format_timestamp(end));
        }
        append_limit(&mut url, limit);
        if let Some(sort) = sort {
            url.query_pairs_mut()
                .append_pair("sort", sort.to_string().as_str());
        }
        Ok(url)
    }
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl EventsQuery {
    pub fn with_include(mut self, event: &str) -> Self {
        self.include.push(event.to_string());
        self
    }
    pub fn with_includes<S: AsRef<str>>(mut self, events: &[S]) -> Self {
        push_all(&mut self.include, events);
        self
    }

    pub fn with_exclude(mut self, event: &str) -> Self {
        self.exclude.push(event.to_string());
        self
    }
    pub fn with_excludes<S: AsRef<str>>(mut self, events: &[S]) -> Self {
        push_all(&mut self.exclude, events);
        self
    }

    pub fn with_start(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_sort(mut self, sort: &str) -> Self {
        self.sort = Some(sort.to_string());
        self
    }

    pub fn with_sort_order(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort.to_string());
        self
    }
}
