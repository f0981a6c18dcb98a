//! Hosting shapes for the application's router

pub mod http;
#[cfg(feature = "lambda")]
pub mod lambda;
