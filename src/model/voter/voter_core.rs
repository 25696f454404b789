use serde::{Deserialize, Serialize};

use crate::model::election::ElectionId;
use crate::model::principal::Principal;

/// Core voter data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    /// Voter unique identity, as authenticated by the external collaborator.
    pub identity: Principal,
    /// Free-form enrollment details, e.g. name and ward.
    pub details: String,
    /// Whether the voter currently holds a cast vote. This is one flag
    /// across the whole registry: an unrevoked vote in one election blocks
    /// voting in every other.
    pub has_voted: bool,
    /// Elections this voter has live votes in, oldest first. Holds at most
    /// one entry while `has_voted` is a single flag.
    pub vote_history: Vec<ElectionId>,
}

impl Voter {
    /// Enroll a new voter with no voting record.
    pub fn new(identity: Principal, details: impl Into<String>) -> Self {
        Self {
            identity,
            details: details.into(),
            has_voted: false,
            vote_history: Vec::new(),
        }
    }
}
