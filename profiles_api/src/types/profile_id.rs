use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Identity of a single profile: an id type such as `email` or `user_id`
/// paired with its value.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProfileId {
    pub id_type: String,
    pub id_value: String,
}

impl ProfileId {
    pub fn new(id_type: &str, id_value: &str) -> Self {
        Self {
            id_type: id_type.to_string(),
            id_value: id_value.to_string(),
        }
    }

    pub fn email(email: &str) -> Self {
        Self::new("email", email)
    }

    pub fn user_id(user_id: &str) -> Self {
        Self::new("user_id", user_id)
    }

    pub fn anonymous_id(anonymous_id: &str) -> Self {
        Self::new("anonymous_id", anonymous_id)
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.id_type, self.id_value)
    }
}

impl FromStr for ProfileId {
    type Err = Error;

    /// Parses `type:value`. Only the first `:` separates, so values may contain colons.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((id_type, id_value)) if !id_type.is_empty() && !id_value.is_empty() => {
                Ok(ProfileId::new(id_type, id_value))
            }
            _ => Err(Error::InvalidProfileId(format!(
                "expected <type>:<value>, got {:?}",
                s
            ))),
        }
    }
}
