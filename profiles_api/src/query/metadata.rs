use url::Url;

use super::{common::append_verbose, Query};
use crate::Error;

/// Parameters for reading a profile's metadata. Only `verbose` applies.
#[derive(Default, Clone, Copy, Debug)]
pub struct MetadataQuery {
    pub verbose: bool,
}

impl Query for MetadataQuery {
    fn add_to_url(&self, url: &Url) -> Result<Url, Error> {
        let mut url = url.clone();
        append_verbose(&mut url, self.verbose);
        Ok(url)
    }
}

impl MetadataQuery {
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
