pub mod ticket_tracker;

pub use ticket_tracker::{NumberFilter, TicketTrackerService};
