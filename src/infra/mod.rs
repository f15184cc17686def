pub mod actions;
pub mod notion;
