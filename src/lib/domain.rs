//! Domain logic, independent of the HTTP runtime and the mail provider

pub mod communication;
pub mod contact;
