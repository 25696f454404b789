use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// An opaque authenticated actor reference, supplied by the external
/// authentication collaborator. The registry never derives or inspects one;
/// equality and hashing are all it relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    pub fn new(identity: impl Into<String>) -> Self {
        Self(identity.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Principal {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(formatter)
    }
}

impl From<&str> for Principal {
    fn from(identity: &str) -> Self {
        Self(identity.to_string())
    }
}

impl From<String> for Principal {
    fn from(identity: String) -> Self {
        Self(identity)
    }
}
