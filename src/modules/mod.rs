pub mod auth;
pub mod profile;
pub mod topic;
