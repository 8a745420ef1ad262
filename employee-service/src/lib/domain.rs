pub mod admin;
pub mod email;
pub mod employee;
