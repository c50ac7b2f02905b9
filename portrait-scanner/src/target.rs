use serde::{Deserialize, Serialize};

/// A profile page to fetch, carrying the id it resolves for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileTarget {
    pub id: String,
    pub profile_url: String,
}

impl ProfileTarget {
    pub fn new(id: impl Into<String>, profile_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            profile_url: profile_url.into(),
        }
    }
}
