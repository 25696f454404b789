use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::counter::Counter;
use crate::model::election::{Election, ElectionId};
use crate::model::principal::Principal;
use crate::model::voter::Voter;
use crate::observer::{VoteCasted, VoteObserver};

mod admin;
mod results;
mod voter;
mod voting;

/// The top-level registry aggregate and sole entry point for every
/// operation.
///
/// Mutating operations take `&mut self`, so a registry behind any exclusive
/// reference gets the single-writer serialization of its transactions from
/// the borrow checker; read-only queries take `&self` and may run
/// concurrently with each other. Every operation either commits all of its
/// steps or returns an error having mutated nothing.
#[derive(Serialize, Deserialize)]
pub struct VotingRegistry {
    /// The administrative principal. Fixed at initialization.
    admin: Principal,
    /// Registered voters by identity.
    voters: HashMap<Principal, Voter>,
    /// Election catalog by ID.
    elections: HashMap<ElectionId, Election>,
    /// Source of election IDs.
    election_ids: Counter,
    /// Attached observers. Not part of the registry state; snapshots restore
    /// with an empty list.
    #[serde(skip)]
    observers: Vec<Box<dyn VoteObserver>>,
}

impl VotingRegistry {
    /// Create an empty registry administered by the given principal.
    pub fn initialize(admin: Principal) -> Self {
        info!("initializing voting registry with admin {admin}");
        Self {
            admin,
            voters: HashMap::new(),
            elections: HashMap::new(),
            election_ids: Counter::new(1),
            observers: Vec::new(),
        }
    }

    /// The administrative principal.
    pub fn admin(&self) -> &Principal {
        &self.admin
    }

    /// Number of registered voters.
    pub fn voter_count(&self) -> usize {
        self.voters.len()
    }

    /// Number of elections in the catalog.
    pub fn election_count(&self) -> usize {
        self.elections.len()
    }

    /// Attach an observer for [`VoteCasted`] events.
    pub fn attach_observer(&mut self, observer: Box<dyn VoteObserver>) {
        self.observers.push(observer);
    }

    /// Fail with `NotAdmin` unless the caller is the admin.
    fn require_admin(&self, caller: &Principal) -> Result<()> {
        if caller == &self.admin {
            Ok(())
        } else {
            Err(Error::NotAdmin(caller.clone()))
        }
    }

    /// Look up an election or fail with `ElectionNotFound`.
    fn election(&self, id: ElectionId) -> Result<&Election> {
        self.elections.get(&id).ok_or(Error::ElectionNotFound(id))
    }

    /// Look up an election for mutation or fail with `ElectionNotFound`.
    fn election_mut(&mut self, id: ElectionId) -> Result<&mut Election> {
        self.elections
            .get_mut(&id)
            .ok_or(Error::ElectionNotFound(id))
    }

    /// Look up a voter or fail with `VoterNotFound`.
    fn voter(&self, identity: &Principal) -> Result<&Voter> {
        self.voters
            .get(identity)
            .ok_or_else(|| Error::VoterNotFound(identity.clone()))
    }

    /// Deliver an event to every attached observer.
    fn notify(&self, event: &VoteCasted) {
        for observer in &self.observers {
            observer.vote_casted(event);
        }
    }
}

impl Debug for VotingRegistry {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("VotingRegistry")
            .field("admin", &self.admin)
            .field("voters", &self.voters)
            .field("elections", &self.elections)
            .field("election_ids", &self.election_ids)
            .field("observers", &self.observers.len())
            .finish()
    }
}
