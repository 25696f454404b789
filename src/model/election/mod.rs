pub use election_core::{Candidate, Election, ElectionMetadata, ElectionState};
pub use view::{ElectionDetails, ElectionSummary, VoteCount};

mod election_core;
mod view;

/// Election IDs are registry-issued and monotonic.
pub type ElectionId = u64;
/// Candidate IDs are election-issued and monotonic within their election.
pub type CandidateId = u64;
