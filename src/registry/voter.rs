use log::info;

use crate::error::{Error, Result};
use crate::model::election::ElectionId;
use crate::model::principal::Principal;
use crate::model::voter::Voter;

use super::VotingRegistry;

impl VotingRegistry {
    /// Enroll the caller as a voter. Self-service: the record is keyed by
    /// the caller's own identity, and no admin involvement is needed.
    pub fn register_voter(
        &mut self,
        details: impl Into<String>,
        caller: &Principal,
    ) -> Result<()> {
        // Check identity uniqueness.
        if self.voters.contains_key(caller) {
            return Err(Error::VoterAlreadyRegistered(caller.clone()));
        }

        info!("registering voter {caller}");
        self.voters
            .insert(caller.clone(), Voter::new(caller.clone(), details));
        Ok(())
    }

    /// Whether the given identity keys a registered voter.
    pub fn verify_voter(&self, identity: &Principal) -> bool {
        self.voters.contains_key(identity)
    }

    /// A voter's enrollment details.
    pub fn get_voter_details(&self, identity: &Principal) -> Result<String> {
        Ok(self.voter(identity)?.details.clone())
    }

    /// Replace a voter's enrollment details. Self-service only: not even the
    /// admin may edit another principal's record.
    pub fn update_voter_details(
        &mut self,
        identity: &Principal,
        new_details: impl Into<String>,
        caller: &Principal,
    ) -> Result<()> {
        if caller != identity {
            return Err(Error::NotAuthorized {
                caller: caller.clone(),
                target: identity.clone(),
            });
        }
        let voter = self
            .voters
            .get_mut(identity)
            .ok_or_else(|| Error::VoterNotFound(identity.clone()))?;
        voter.details = new_details.into();
        Ok(())
    }

    /// The elections a voter holds live votes in, oldest first.
    pub fn get_vote_history(&self, identity: &Principal) -> Result<Vec<ElectionId>> {
        Ok(self.voter(identity)?.vote_history.clone())
    }
}
