use log::info;
use serde::{Deserialize, Serialize};

use crate::model::election::{CandidateId, ElectionId};
use crate::model::principal::Principal;

/// Notification emitted once per successful vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteCasted {
    /// The voter who cast the vote.
    pub voter: Principal,
    /// The election voted in.
    pub election_id: ElectionId,
    /// The candidate voted for.
    pub candidate_id: CandidateId,
}

/// Outbound observation channel for vote events.
///
/// Delivery is synchronous and happens after the vote has committed. It is
/// best-effort: the registry never rolls back a vote on behalf of an
/// observer, so implementations handle their own delivery failures.
pub trait VoteObserver: Send + Sync {
    /// Called once per successful [`vote`](crate::VotingRegistry::vote).
    fn vote_casted(&self, event: &VoteCasted);
}

/// Observer that forwards every event to the [`log`] facade.
#[derive(Debug, Copy, Clone)]
pub struct LogObserver;

impl VoteObserver for LogObserver {
    fn vote_casted(&self, event: &VoteCasted) {
        info!(
            "vote casted by {} in election {} for candidate {}",
            event.voter, event.election_id, event.candidate_id
        );
    }
}
