use url::Url;

use super::{
    common::{append_limit, append_list, append_verbose, push_all, validate_limit},
    Query,
};
use crate::Error;

/// Parameters for reading the external ids attached to a profile.
#[derive(Default, Clone, Debug)]
pub struct ExternalIdsQuery {
    /// Id types to return, e.g. `email` or `anonymous_id`.
    pub include: Vec<String>,
    /// Maximum number of ids, 1 to 100.
    pub limit: Option<i64>,
    pub verbose: bool,
}

impl Query for ExternalIdsQuery {
    fn add_to_url(&self, url: &Url) -> Result<Url, Error> {
        let limit = self.limit.map(validate_limit).transpose()?;
        let mut url = url.clone();
        append_list(&mut url, "include", &self.include);
        append_limit(&mut url, limit);
        append_verbose(&mut url, self.verbose);
        Ok(url)
    }
}

impl ExternalIdsQuery {
    pub fn with_include(mut self, id_type: &str) -> Self {
        self.include.push(id_type.to_string());
        self
    }
    pub fn with_includes<S: AsRef<str>>(mut self, id_types: &[S]) -> Self {
        push_all(&mut self.include, id_types);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{ExternalIdsQuery, Query};

    #[test]
    fn test_external_ids_query() {
        let url = Url::parse("https://example.com/external_ids").unwrap();

        insta::assert_snapshot!(
            ExternalIdsQuery::default()
                .with_include("email")
                .with_include("anonymous_id")
                .with_limit(25)
                .with_verbose(true)
                .add_to_url(&url)
                .unwrap()
                .to_string(),
            @"https://example.com/external_ids?include=email%2Canonymous_id&limit=25&verbose=true"
        );
    }

    #[test]
    fn test_external_ids_query_rejects_limit() {
        let url = Url::parse("https://example.com/external_ids").unwrap();
        let err = ExternalIdsQuery::default()
            .with_limit(0)
            .add_to_url(&url)
            .unwrap_err();
        assert!(matches!(err, crate::Error::InvalidLimit { limit: 0, .. }));
    }
}
