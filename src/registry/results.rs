use crate::error::Result;
use crate::model::election::{
    Candidate, ElectionDetails, ElectionId, ElectionState, ElectionSummary, VoteCount,
};

use super::VotingRegistry;

impl VotingRegistry {
    /// Final tally of an ended election, in roster order.
    ///
    /// Tallying is a projection of the running counts, not a finalize step:
    /// calling it repeatedly is harmless.
    pub fn tally_votes(&self, election_id: ElectionId) -> Result<Vec<VoteCount>> {
        let election = self.election(election_id)?;
        election.require_state(ElectionState::Ended)?;
        Ok(election.results())
    }

    /// Current counts of an election in any state, in roster order. Unlike
    /// [`tally_votes`](Self::tally_votes) this is deliberately not phase
    /// gated, for in-progress visibility.
    pub fn get_election_results(&self, election_id: ElectionId) -> Result<Vec<VoteCount>> {
        Ok(self.election(election_id)?.results())
    }

    /// Full public view of one election.
    pub fn get_election_details(&self, election_id: ElectionId) -> Result<ElectionDetails> {
        Ok(self.election(election_id)?.into())
    }

    /// An election's candidate roster, in insertion order.
    pub fn get_candidates(&self, election_id: ElectionId) -> Result<Vec<Candidate>> {
        Ok(self.election(election_id)?.candidates.clone())
    }

    /// Summaries of every election, ascending by ID.
    pub fn list_elections(&self) -> Vec<ElectionSummary> {
        let mut summaries: Vec<ElectionSummary> =
            self.elections.values().map(ElectionSummary::from).collect();
        summaries.sort_by_key(|summary| summary.id);
        summaries
    }
}
