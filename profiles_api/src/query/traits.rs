use url::Url;

use super::{
    common::{append_limit, append_list, append_verbose, push_all, validate_limit},
    Query,
};
use crate::Error;

/// Parameters for reading a profile's traits.
#[derive(Default, Clone, Debug)]
pub struct TraitsQuery {
    /// Trait names to return. Empty returns every trait.
    pub include: Vec<String>,
    /// Ask for per-trait metadata. `false` leaves the parameter out.
    pub verbose: bool,
    /// Maximum number of traits, 1 to 100.
    pub limit: Option<i64>,
}

impl Query for TraitsQuery {
    fn add_to_url(&self, url: &Url) -> Result<Url, Error> {
        let limit = self.limit.map(validate_limit).transpose()?;
        let mut url = url.clone();
        append_list(&mut url, "include", &self.include);
        append_verbose(&mut url, self.verbose);
        append_limit(&mut url, limit);
        Ok(url)
    }
}

impl TraitsQuery {
    pub fn with_include(mut self, name: &str) -> Self {
        self.include.push(name.to_string());
        self
    }
    pub fn with_includes<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        push_all(&mut self.include, names);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}
