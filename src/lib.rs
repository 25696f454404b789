//! Authoritative election registry: voter enrollment, candidate rosters,
//! phase-gated vote casting and revocation, and tallying, all driven through
//! a single [`VotingRegistry`] aggregate.
//!
//! Caller identity, durable storage, and the wall clock are external
//! collaborators. Every mutating operation receives an already-authenticated
//! [`Principal`] as an explicit parameter, registry snapshots travel through
//! serde, and election timestamps are stored verbatim without ever being
//! checked against "now".

pub mod error;
pub mod model;
pub mod observer;
pub mod registry;

pub use error::{Error, Result};
pub use model::election::{
    Candidate, CandidateId, Election, ElectionDetails, ElectionId, ElectionState, ElectionSummary,
    VoteCount,
};
pub use model::principal::Principal;
pub use model::voter::Voter;
pub use observer::{LogObserver, VoteCasted, VoteObserver};
pub use registry::VotingRegistry;
