pub mod counter;
pub mod election;
pub mod principal;
pub mod voter;
