//! OpenAPI module

use utoipa::OpenApi;

use crate::infrastructure::http::{errors::MessageResponse, handlers::*};

/// Where the contact route is documented before the configured path is applied
const DOCUMENTED_CONTACT_PATH: &str = "/api/contact";

#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Contact Relay"),
    paths(contact::handler, uptime::handler),
    components(schemas(
        contact::ContactRequestBody,
        uptime::UptimeResponse,
        MessageResponse,
    ))
)]
pub struct ApiDocs;

/// Builds the OpenAPI document with the contact route listed under `contact_path`.
pub fn api_docs(contact_path: &str) -> utoipa::openapi::OpenApi {
    let mut docs = ApiDocs::openapi();

    if contact_path != DOCUMENTED_CONTACT_PATH {
        if let Some(item) = docs.paths.paths.remove(DOCUMENTED_CONTACT_PATH) {
            docs.paths.paths.insert(contact_path.to_string(), item);
        }
    }

    docs
}
