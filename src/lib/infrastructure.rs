//! Adapters binding the domain to concrete runtimes and providers

pub mod config;
pub mod email;
pub mod http;
