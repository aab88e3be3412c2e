//! Credential and connection settings, from flags with an environment fallback.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use profiles_api::ProfileClient;

pub const NAMESPACE_VAR: &str = "PROFILES_NAMESPACE";
pub const SECRET_VAR: &str = "PROFILES_SECRET";

/// Resolved connection settings for one invocation.
pub struct Settings {
    pub namespace: String,
    pub secret: String,
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
}

impl Settings {
    /// Prefers explicit flags, then the `PROFILES_*` environment variables.
    pub fn resolve<F>(
        namespace: Option<&str>,
        secret: Option<&str>,
        base_url: Option<&str>,
        timeout_secs: Option<u64>,
        lookup: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            namespace: required(namespace, NAMESPACE_VAR, "--namespace", &lookup)?,
            secret: required(secret, SECRET_VAR, "--secret", &lookup)?,
            base_url: base_url.map(str::to_string),
            timeout: timeout_secs.map(Duration::from_secs),
        })
    }

    pub fn build_client(&self) -> Result<ProfileClient> {
        let client = match &self.base_url {
            Some(base_url) => ProfileClient::with_base_url(base_url, &self.namespace, &self.secret),
            None => ProfileClient::new(&self.namespace, &self.secret),
        }
        .context("Failed to create profile client")?;
        match self.timeout {
            Some(timeout) => client
                .with_timeout(timeout)
                .context("Failed to apply request timeout"),
            None => Ok(client),
        }
    }
}

fn required<F>(flag: Option<&str>, var: &str, flag_name: &str, lookup: &F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let value = match flag {
        Some(value) => Some(value.to_string()),
        None => lookup(var),
    };
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => bail!("Missing {}: pass {} or set {}", var, flag_name, var),
    }
}
