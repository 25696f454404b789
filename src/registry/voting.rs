use log::{info, warn};

use crate::error::{Error, Result};
use crate::model::election::{CandidateId, ElectionId, ElectionState};
use crate::model::principal::Principal;
use crate::observer::VoteCasted;

use super::VotingRegistry;

impl VotingRegistry {
    /// Cast the caller's vote for a candidate in an ongoing election.
    ///
    /// A voter holds at most one live vote across the whole registry: until
    /// it is revoked, any further `vote` call fails with
    /// `VoteAlreadyCasted`, whichever election it targets.
    pub fn vote(
        &mut self,
        election_id: ElectionId,
        candidate_id: CandidateId,
        caller: &Principal,
    ) -> Result<()> {
        // Resolve the voter.
        let voter = self
            .voters
            .get_mut(caller)
            .ok_or_else(|| Error::VoterNotFound(caller.clone()))?;

        // Resolve the election; it must be open.
        let election = self
            .elections
            .get_mut(&election_id)
            .ok_or(Error::ElectionNotFound(election_id))?;
        election.require_state(ElectionState::Ongoing)?;

        // Resolve the candidate's count slot. The count table is bijective
        // with the roster, so this lookup doubles as the existence check.
        let count = election
            .vote_counts
            .get_mut(&candidate_id)
            .ok_or(Error::CandidateNotFound {
                election: election_id,
                candidate: candidate_id,
            })?;

        // One live vote per voter, registry-wide.
        if voter.has_voted {
            return Err(Error::VoteAlreadyCasted(caller.clone()));
        }

        // All checks passed; commit.
        *count += 1;
        voter.has_voted = true;
        voter.vote_history.push(election_id);
        info!("voter {caller} voted for candidate {candidate_id} in election {election_id}");

        // Notify observers once the vote is committed; delivery is
        // best-effort and cannot undo it.
        let event = VoteCasted {
            voter: caller.clone(),
            election_id,
            candidate_id,
        };
        self.notify(&event);
        Ok(())
    }

    /// Revoke the caller's vote in the given election, restoring their
    /// eligibility to vote.
    ///
    /// The decremented count belongs to the caller-supplied `candidate_id`;
    /// callers are trusted to name the candidate they originally voted for,
    /// and an ID unknown to the election leaves the count table untouched.
    /// If the voter's history holds no entry for `election_id`, the call is
    /// a no-op rather than an error.
    pub fn revoke_vote(
        &mut self,
        election_id: ElectionId,
        candidate_id: CandidateId,
        caller: &Principal,
    ) -> Result<()> {
        // Resolve the voter and election.
        let voter = self
            .voters
            .get_mut(caller)
            .ok_or_else(|| Error::VoterNotFound(caller.clone()))?;
        let election = self
            .elections
            .get_mut(&election_id)
            .ok_or(Error::ElectionNotFound(election_id))?;

        if !voter.has_voted {
            return Err(Error::NoVotesToRevoke(caller.clone()));
        }

        // Reverse the first matching history entry, if any.
        match voter.vote_history.iter().position(|id| *id == election_id) {
            Some(index) => {
                if let Some(count) = election.vote_counts.get_mut(&candidate_id) {
                    *count = count.saturating_sub(1);
                }
                voter.has_voted = false;
                voter.vote_history.remove(index);
                info!("voter {caller} revoked their vote in election {election_id}");
            }
            None => {
                warn!("voter {caller} has no vote in election {election_id} to revoke");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    use chrono::{TimeZone, Utc};

    use crate::observer::VoteObserver;
    use crate::registry::examples::{admin, alice, bob};

    use super::*;

    /// Observer that records every event it is handed.
    struct RecordingObserver(Arc<Mutex<Vec<VoteCasted>>>);

    impl VoteObserver for RecordingObserver {
        fn vote_casted(&self, event: &VoteCasted) {
            self.0.lock().unwrap().push(event.clone());
        }
    }

    fn counts_of(registry: &VotingRegistry, election_id: ElectionId) -> Vec<(CandidateId, u64)> {
        registry
            .get_election_results(election_id)
            .unwrap()
            .into_iter()
            .map(|vote_count| (vote_count.candidate_id, vote_count.count))
            .collect()
    }

    fn assert_bijection(registry: &VotingRegistry, election_id: ElectionId) {
        let election = registry.election(election_id).unwrap();
        let roster_ids: HashSet<_> = election.candidates.iter().map(|c| c.id).collect();
        let count_ids: HashSet<_> = election.vote_counts.keys().copied().collect();
        assert_eq!(roster_ids, count_ids);
    }

    #[test]
    fn vote_increments_exactly_one_count() {
        let mut registry = VotingRegistry::ongoing_example();

        assert_eq!(registry.vote(1, 1, &alice()), Ok(()));
        assert_eq!(counts_of(&registry, 1), vec![(1, 1), (2, 0)]);
        assert_eq!(registry.get_vote_history(&alice()).unwrap(), vec![1]);
        assert_bijection(&registry, 1);
    }

    #[test]
    fn vote_requires_registered_voter() {
        let mut registry = VotingRegistry::ongoing_example();

        // The voter is resolved before the election, so an unknown voter
        // wins even against an unknown election.
        assert_eq!(
            registry.vote(9, 1, &bob()),
            Err(Error::VoterNotFound(bob()))
        );
    }

    #[test]
    fn vote_requires_existing_election() {
        let mut registry = VotingRegistry::ongoing_example();
        assert_eq!(
            registry.vote(9, 1, &alice()),
            Err(Error::ElectionNotFound(9))
        );
    }

    #[test]
    fn vote_requires_ongoing_election() {
        let mut registry = VotingRegistry::upcoming_example();
        assert_eq!(
            registry.vote(1, 1, &alice()),
            Err(Error::InvalidElectionState {
                election: 1,
                expected: ElectionState::Ongoing,
                actual: ElectionState::Upcoming,
            })
        );

        registry.start_election(1, &admin()).unwrap();
        registry.end_election(1, &admin()).unwrap();
        assert_eq!(
            registry.vote(1, 1, &alice()),
            Err(Error::InvalidElectionState {
                election: 1,
                expected: ElectionState::Ongoing,
                actual: ElectionState::Ended,
            })
        );
        assert_eq!(counts_of(&registry, 1), vec![(1, 0), (2, 0)]);
    }

    #[test]
    fn vote_requires_existing_candidate() {
        let mut registry = VotingRegistry::ongoing_example();

        assert_eq!(
            registry.vote(1, 9, &alice()),
            Err(Error::CandidateNotFound {
                election: 1,
                candidate: 9,
            })
        );

        // The failed vote left no trace.
        assert_eq!(counts_of(&registry, 1), vec![(1, 0), (2, 0)]);
        assert_eq!(registry.get_vote_history(&alice()).unwrap(), Vec::<u64>::new());
        assert!(registry.vote(1, 1, &alice()).is_ok());
    }

    #[test]
    fn vote_is_exactly_once_across_the_registry() {
        let mut registry = VotingRegistry::ongoing_example();
        let second = registry
            .create_election(
                "Second Committee",
                Utc.timestamp_opt(300, 0).unwrap(),
                Utc.timestamp_opt(400, 0).unwrap(),
                &admin(),
            )
            .unwrap();
        registry
            .add_candidate(second, "Zack Zhou", &admin())
            .unwrap();
        registry.start_election(second, &admin()).unwrap();

        registry.vote(1, 1, &alice()).unwrap();

        // The same election refuses a second vote...
        assert_eq!(
            registry.vote(1, 2, &alice()),
            Err(Error::VoteAlreadyCasted(alice()))
        );
        // ...and so does every other election, until the vote is revoked.
        assert_eq!(
            registry.vote(second, 1, &alice()),
            Err(Error::VoteAlreadyCasted(alice()))
        );
        assert_eq!(counts_of(&registry, 1), vec![(1, 1), (2, 0)]);
        assert_eq!(counts_of(&registry, second), vec![(1, 0)]);
    }

    #[test]
    fn revoke_restores_counts_and_eligibility() {
        let mut registry = VotingRegistry::ongoing_example();
        registry.vote(1, 1, &alice()).unwrap();

        assert_eq!(registry.revoke_vote(1, 1, &alice()), Ok(()));
        assert_eq!(counts_of(&registry, 1), vec![(1, 0), (2, 0)]);
        assert_eq!(registry.get_vote_history(&alice()).unwrap(), Vec::<u64>::new());

        // Eligibility is back: the voter may vote again.
        assert_eq!(registry.vote(1, 2, &alice()), Ok(()));
        assert_eq!(counts_of(&registry, 1), vec![(1, 0), (2, 1)]);
    }

    #[test]
    fn revoke_without_a_live_vote() {
        let mut registry = VotingRegistry::ongoing_example();
        assert_eq!(
            registry.revoke_vote(1, 1, &alice()),
            Err(Error::NoVotesToRevoke(alice()))
        );
        assert_eq!(
            registry.revoke_vote(1, 1, &bob()),
            Err(Error::VoterNotFound(bob()))
        );
        assert_eq!(
            registry.revoke_vote(9, 1, &alice()),
            Err(Error::ElectionNotFound(9))
        );
    }

    #[test]
    fn revoke_in_the_wrong_election_is_a_silent_noop() {
        let mut registry = VotingRegistry::ongoing_example();
        let second = registry
            .create_election(
                "Second Committee",
                Utc.timestamp_opt(300, 0).unwrap(),
                Utc.timestamp_opt(400, 0).unwrap(),
                &admin(),
            )
            .unwrap();
        registry
            .add_candidate(second, "Zack Zhou", &admin())
            .unwrap();
        registry.start_election(second, &admin()).unwrap();

        registry.vote(1, 1, &alice()).unwrap();

        // The history has no entry for the second election: nothing happens
        // and no error is raised.
        assert_eq!(registry.revoke_vote(second, 1, &alice()), Ok(()));
        assert_eq!(counts_of(&registry, 1), vec![(1, 1), (2, 0)]);
        assert_eq!(counts_of(&registry, second), vec![(1, 0)]);
        assert_eq!(registry.get_vote_history(&alice()).unwrap(), vec![1]);
        assert_eq!(
            registry.vote(1, 2, &alice()),
            Err(Error::VoteAlreadyCasted(alice()))
        );
    }

    #[test]
    fn revoke_decrements_the_supplied_candidate() {
        let mut registry = VotingRegistry::ongoing_example();
        registry.register_voter("Bob Burton", &bob()).unwrap();
        registry.vote(1, 1, &alice()).unwrap();
        registry.vote(1, 2, &bob()).unwrap();

        // Alice voted for candidate 1 but names candidate 2: the registry
        // takes her word for it and candidate 2 loses a vote.
        assert_eq!(registry.revoke_vote(1, 2, &alice()), Ok(()));
        assert_eq!(counts_of(&registry, 1), vec![(1, 1), (2, 0)]);
        assert_eq!(registry.get_vote_history(&alice()).unwrap(), Vec::<u64>::new());
    }

    #[test]
    fn revoke_with_unknown_candidate_still_restores_eligibility() {
        let mut registry = VotingRegistry::ongoing_example();
        registry.vote(1, 1, &alice()).unwrap();

        // No candidate 9 exists: the count table is untouched, but the
        // history entry matched, so the vote itself is gone.
        assert_eq!(registry.revoke_vote(1, 9, &alice()), Ok(()));
        assert_eq!(counts_of(&registry, 1), vec![(1, 1), (2, 0)]);
        assert_eq!(registry.get_vote_history(&alice()).unwrap(), Vec::<u64>::new());
        assert_eq!(registry.vote(1, 2, &alice()), Ok(()));
        assert_bijection(&registry, 1);
    }

    #[test]
    fn revoke_never_drives_a_count_below_zero() {
        let mut registry = VotingRegistry::ongoing_example();
        registry.register_voter("Bob Burton", &bob()).unwrap();
        registry.vote(1, 1, &alice()).unwrap();
        registry.vote(1, 1, &bob()).unwrap();

        // Alice mis-names candidate 2, whose count is already zero.
        assert_eq!(registry.revoke_vote(1, 2, &alice()), Ok(()));
        assert_eq!(counts_of(&registry, 1), vec![(1, 2), (2, 0)]);
    }

    #[test]
    fn observers_hear_committed_votes_only() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let mut registry = VotingRegistry::ongoing_example();
        registry.attach_observer(Box::new(RecordingObserver(events.clone())));

        // A failed vote emits nothing.
        let _ = registry.vote(1, 9, &alice());
        assert!(events.lock().unwrap().is_empty());

        registry.vote(1, 1, &alice()).unwrap();
        let recorded = events.lock().unwrap();
        assert_eq!(
            *recorded,
            vec![VoteCasted {
                voter: alice(),
                election_id: 1,
                candidate_id: 1,
            }]
        );
    }
}
