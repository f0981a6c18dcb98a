#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Contact form API as a long-running HTTP server

use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Result;
use clap::Parser;
use contact_relay::infrastructure::{
    config::AppConfig,
    http::{servers::http::HttpServer, state::AppState, Server},
};

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let config = AppConfig::parse();

    let state = AppState::new(config.contact_service()?);

    let address = SocketAddr::new(Ipv4Addr::UNSPECIFIED.into(), config.server.port);

    HttpServer::new(address, state, &config.server)?.run().await
}
