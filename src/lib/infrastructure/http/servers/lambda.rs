//! On-demand function host

use anyhow::{anyhow, Result};
use axum::{async_trait, Router};
use tracing::debug;

use crate::{
    domain::contact::ContactService,
    infrastructure::http::{router, state::AppState, HttpServerConfig, Server},
};

/// Serves the application's router from a Lambda function, one invocation per request
#[derive(Debug)]
pub struct LambdaServer {
    router: Router,
}

impl LambdaServer {
    /// Returns a new Lambda host for the application.
    pub fn new<C: ContactService>(state: AppState<C>, config: &HttpServerConfig) -> Self {
        Self {
            router: router(state, config),
        }
    }
}

#[async_trait]
impl Server for LambdaServer {
    #[mutants::skip]
    async fn run(self) -> Result<()> {
        debug!("waiting for Lambda invocations");

        lambda_http::run(self.router)
            .await
            .map_err(|e| anyhow!("lambda runtime error: {e}"))
    }
}
