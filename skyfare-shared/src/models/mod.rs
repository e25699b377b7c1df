pub mod airport;
pub mod flight;
