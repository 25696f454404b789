use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::election::{CandidateId, ElectionId, ElectionState};
use crate::model::principal::Principal;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the registry can signal.
///
/// All variants are synchronous precondition violations: the offending
/// operation aborts without mutating anything, and the caller surfaces the
/// kind unchanged. There is no retriable internal error class.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The caller is not the registry admin.
    #[error("caller {0} is not the registry admin")]
    NotAdmin(Principal),
    /// The caller may not act on another principal's record.
    #[error("caller {caller} may not modify voter {target}")]
    NotAuthorized {
        caller: Principal,
        target: Principal,
    },
    #[error("voter {0} is already registered")]
    VoterAlreadyRegistered(Principal),
    #[error("no voter registered with identity {0}")]
    VoterNotFound(Principal),
    #[error("no election with ID {0}")]
    ElectionNotFound(ElectionId),
    #[error("no candidate {candidate} in election {election}")]
    CandidateNotFound {
        election: ElectionId,
        candidate: CandidateId,
    },
    /// The election is in the wrong phase for the attempted operation.
    #[error("election {election} is {actual:?}, expected {expected:?}")]
    InvalidElectionState {
        election: ElectionId,
        expected: ElectionState,
        actual: ElectionState,
    },
    #[error("voter {0} has already cast a vote")]
    VoteAlreadyCasted(Principal),
    #[error("voter {0} has no vote to revoke")]
    NoVotesToRevoke(Principal),
    /// An election must end strictly after it starts.
    #[error("election would end at {end}, before its start at {start}")]
    InvalidTimeRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}
