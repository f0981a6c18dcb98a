//! Outbound communication

pub mod mailer;
