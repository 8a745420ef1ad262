pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::admin;
pub use domain::employee;
pub use outbound::repositories;
