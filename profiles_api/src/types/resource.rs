use serde::{Deserialize, Serialize};

/// Profile sub-resource addressed by the last path segment of a request.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Traits,
    Events,
    ExternalIds,
    Metadata,
    Links,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Traits => "traits",
            Resource::Events => "events",
            Resource::ExternalIds => "external_ids",
            Resource::Metadata => "metadata",
            Resource::Links => "links",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
