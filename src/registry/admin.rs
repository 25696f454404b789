use chrono::{DateTime, Utc};
use log::info;

use crate::error::{Error, Result};
use crate::model::election::{CandidateId, Election, ElectionId, ElectionState};
use crate::model::principal::Principal;

use super::VotingRegistry;

impl VotingRegistry {
    /// Create a new election in the `Upcoming` state and return its ID.
    /// Admin only. The timestamps are stored verbatim; the only check is
    /// that the election ends after it starts.
    pub fn create_election(
        &mut self,
        name: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        caller: &Principal,
    ) -> Result<ElectionId> {
        self.require_admin(caller)?;
        if end_time <= start_time {
            return Err(Error::InvalidTimeRange {
                start: start_time,
                end: end_time,
            });
        }

        let id = self.election_ids.next();
        let name = name.into();
        info!("creating election {id} \"{name}\"");
        self.elections
            .insert(id, Election::new(id, name, start_time, end_time));
        Ok(id)
    }

    /// Append a candidate to an election's roster and return the issued
    /// candidate ID. Only allowed while the election is `Upcoming`; the
    /// roster and its count table are updated together. There is no admin
    /// gate: any principal may nominate candidates.
    pub fn add_candidate(
        &mut self,
        election_id: ElectionId,
        name: impl Into<String>,
        caller: &Principal,
    ) -> Result<CandidateId> {
        let election = self.election_mut(election_id)?;
        election.require_state(ElectionState::Upcoming)?;

        let name = name.into();
        let id = election.add_candidate(name.clone());
        info!("candidate {id} \"{name}\" added to election {election_id} by {caller}");
        Ok(id)
    }

    /// Open an election for voting. Admin only; the election must still be
    /// `Upcoming`.
    pub fn start_election(&mut self, election_id: ElectionId, caller: &Principal) -> Result<()> {
        self.require_admin(caller)?;
        let election = self.election_mut(election_id)?;
        election.require_state(ElectionState::Upcoming)?;

        election.metadata.state = ElectionState::Ongoing;
        info!("election {election_id} is now ongoing");
        Ok(())
    }

    /// Close an election. Admin only. Reachable from any state: ending an
    /// election that never opened is legal, as is ending one twice.
    pub fn end_election(&mut self, election_id: ElectionId, caller: &Principal) -> Result<()> {
        self.require_admin(caller)?;
        let election = self.election_mut(election_id)?;
        election.metadata.state = ElectionState::Ended;
        info!("election {election_id} has ended");
        Ok(())
    }
}
