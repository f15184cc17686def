pub mod pull_request;
pub mod scope;
pub mod ticket;
