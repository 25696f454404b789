use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::counter::Counter;

use super::view::VoteCount;
use super::{CandidateId, ElectionId};

/// Core election data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Election {
    /// Election unique ID, issued by the registry.
    pub id: ElectionId,
    /// Top-level metadata.
    #[serde(flatten)]
    pub metadata: ElectionMetadata,
    /// Candidate roster, in insertion order.
    pub candidates: Vec<Candidate>,
    /// Vote counts keyed by candidate ID. The key set always equals the
    /// roster's ID set; [`add_candidate`](Self::add_candidate) updates both
    /// together.
    pub vote_counts: HashMap<CandidateId, u64>,
    /// Source of candidate IDs for this election.
    candidate_ids: Counter,
}

impl Election {
    /// Create a new election in the `Upcoming` state with an empty roster.
    pub fn new(
        id: ElectionId,
        name: String,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            metadata: ElectionMetadata {
                name,
                state: ElectionState::Upcoming,
                start_time,
                end_time,
            },
            candidates: Vec::new(),
            vote_counts: HashMap::new(),
            candidate_ids: Counter::new(1),
        }
    }

    /// Append a candidate to the roster, insert its zero vote count, and
    /// return the issued ID. Phase rules are the registry's job; this is
    /// only the bookkeeping.
    pub(crate) fn add_candidate(&mut self, name: String) -> CandidateId {
        let id = self.candidate_ids.next();
        self.candidates.push(Candidate { id, name });
        self.vote_counts.insert(id, 0);
        id
    }

    /// Look up a candidate by ID.
    pub fn candidate(&self, id: CandidateId) -> Option<&Candidate> {
        self.candidates.iter().find(|candidate| candidate.id == id)
    }

    /// Current count for every candidate, in roster order.
    pub fn results(&self) -> Vec<VoteCount> {
        self.candidates
            .iter()
            .map(|candidate| VoteCount {
                candidate_id: candidate.id,
                count: self.vote_counts.get(&candidate.id).copied().unwrap_or(0),
            })
            .collect()
    }

    /// Fail with `InvalidElectionState` unless the election is in the given
    /// state.
    pub fn require_state(&self, expected: ElectionState) -> Result<()> {
        if self.metadata.state == expected {
            Ok(())
        } else {
            Err(Error::InvalidElectionState {
                election: self.id,
                expected,
                actual: self.metadata.state,
            })
        }
    }
}

/// A view on just the election's top-level metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionMetadata {
    /// Election name.
    pub name: String,
    /// Election state.
    pub state: ElectionState,
    /// Election start time. Stored verbatim, never checked against "now".
    pub start_time: DateTime<Utc>,
    /// Election end time. Strictly after `start_time`.
    pub end_time: DateTime<Utc>,
}

/// States in the election lifecycle. Transitions are linear; there is no way
/// back.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElectionState {
    /// Created but not yet open. The only state that accepts candidates.
    Upcoming,
    /// Open for vote casting.
    Ongoing,
    /// Closed. Immutable apart from tallying.
    Ended,
}

/// A single roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Candidate ID, unique within its election.
    pub id: CandidateId,
    /// Candidate display name.
    pub name: String,
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use chrono::TimeZone;

    use super::*;

    impl Election {
        pub fn upcoming_example() -> Self {
            Election::new(
                1,
                "Sports Club Committee".to_string(),
                Utc.timestamp_opt(100, 0).unwrap(),
                Utc.timestamp_opt(200, 0).unwrap(),
            )
        }

        pub fn ongoing_example() -> Self {
            let mut example = Self::upcoming_example();
            example.add_candidate("Xavier Xu".to_string());
            example.add_candidate("Yolanda Young".to_string());
            example.metadata.state = ElectionState::Ongoing;
            example
        }
    }
}
