pub use voter_core::Voter;

mod voter_core;
