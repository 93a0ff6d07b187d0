pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::agent;
pub use domain::property;
pub use domain::refdata;
pub use outbound::repositories;
