#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Contact form API as an on-demand Lambda function

use anyhow::Result;
use clap::Parser;
use contact_relay::infrastructure::{
    config::AppConfig,
    http::{servers::lambda::LambdaServer, state::AppState, Server},
};

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    let config = AppConfig::parse();

    let state = AppState::new(config.contact_service()?);

    LambdaServer::new(state, &config.server).run().await
}
