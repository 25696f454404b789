use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::election_core::{Candidate, Election, ElectionState};
use super::{CandidateId, ElectionId};

/// Full public view of one election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionDetails {
    pub name: String,
    pub candidates: Vec<Candidate>,
    pub state: ElectionState,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl From<&Election> for ElectionDetails {
    fn from(election: &Election) -> Self {
        Self {
            name: election.metadata.name.clone(),
            candidates: election.candidates.clone(),
            state: election.metadata.state,
            start_time: election.metadata.start_time,
            end_time: election.metadata.end_time,
        }
    }
}

/// One line of an election listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionSummary {
    pub id: ElectionId,
    pub name: String,
    pub state: ElectionState,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl From<&Election> for ElectionSummary {
    fn from(election: &Election) -> Self {
        Self {
            id: election.id,
            name: election.metadata.name.clone(),
            state: election.metadata.state,
            start_time: election.metadata.start_time,
            end_time: election.metadata.end_time,
        }
    }
}

/// Current count for a single candidate. Counts never go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteCount {
    pub candidate_id: CandidateId,
    pub count: u64,
}
