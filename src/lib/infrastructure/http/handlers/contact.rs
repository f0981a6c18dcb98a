//! Contact form handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::{
    domain::contact::{ContactForm, ContactService},
    infrastructure::http::{
        errors::{ApiError, MessageResponse, MESSAGE_SENT, METHOD_NOT_ALLOWED},
        state::AppState,
    },
};

/// Contact form request body
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactRequestBody {
    /// The submitter's name
    #[schema(example = "Ann")]
    pub name: String,

    /// The submitter's email address
    #[schema(example = "ann@example.com")]
    pub email: String,

    /// The subject of the query
    #[schema(example = "Pricing")]
    pub subject: String,

    /// The message
    #[schema(example = "Hi there")]
    pub message: String,
}

/// Submit a contact form
#[utoipa::path(
    post,
    operation_id = "submit_contact_form",
    tag = "Contact",
    path = "/api/contact",
    request_body = ContactRequestBody,
    responses(
        (status = StatusCode::OK, description = "Email sent", body = MessageResponse, example = json!({"message": "Message sent successfully!"})),
        (status = StatusCode::BAD_REQUEST, description = "A field is missing", body = MessageResponse, example = json!({"message": "Please fill in all fields."})),
        (status = StatusCode::METHOD_NOT_ALLOWED, description = "Method other than POST", body = MessageResponse, example = json!({"message": "Method Not Allowed"})),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "The email could not be sent", body = MessageResponse, example = json!({"message": "Failed to send message. Please try again later."})),
    )
)]
pub async fn handler<C: ContactService>(
    State(state): State<AppState<C>>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    // Anything other than a JSON object sent as JSON is an empty form
    let form = body
        .map(|Json(fields)| ContactForm::from(fields))
        .unwrap_or_default();

    state.contact.submit(&form).await?;

    Ok(Json(MessageResponse::new(MESSAGE_SENT)))
}

/// Rejects any method other than `POST` on the contact route
pub async fn method_not_allowed() -> ApiError {
    ApiError::new_405(METHOD_NOT_ALLOWED)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anyhow::anyhow;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        domain::{
            communication::mailer::{tests::MockMailer, MailerError},
            contact::{
                tests::{test_contact_config, MockContactService},
                ContactServiceImpl,
            },
        },
        infrastructure::http::{
            errors::MessageResponse,
            router,
            state::{tests::test_state, AppState},
            tests::test_config,
            HttpServerConfig,
        },
    };

    fn server(mailer: MockMailer) -> TestServer {
        let contact = ContactServiceImpl::new(test_contact_config(), Arc::new(mailer));

        TestServer::new(router(AppState::new(contact), &test_config())).expect("test server")
    }

    fn body() -> serde_json::Value {
        json!({
            "name": "Ann",
            "email": "ann@x.com",
            "subject": "Pricing",
            "message": "Hi\nthere",
        })
    }

    #[tokio::test]
    async fn test_contact_success() -> TestResult {
        let receiver = test_contact_config().receiver;

        let mut mailer = MockMailer::new();

        mailer
            .expect_send_email()
            .times(1)
            .withf(move |message| {
                message.to == receiver
                    && message.subject == "New Client Query Pricing from Ann"
                    && message.html_body.contains("<strong>Name:</strong> Ann")
            })
            .returning(|_| Ok(()));

        let response = server(mailer).post("/api/contact").json(&body()).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            response.json::<serde_json::Value>(),
            json!({ "message": "Message sent successfully!" })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_contact_missing_field() -> TestResult {
        for key in ["name", "email", "subject", "message"] {
            let mut mailer = MockMailer::new();
            mailer.expect_send_email().times(0);

            let mut body = body();
            body[key] = json!("");

            let response = server(mailer).post("/api/contact").json(&body).await;

            let json = response.json::<MessageResponse>();

            assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
            assert_eq!(json.message, "Please fill in all fields.");
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_contact_malformed_body() -> TestResult {
        let mut mailer = MockMailer::new();
        mailer.expect_send_email().times(0);

        let response = server(mailer)
            .post("/api/contact")
            .text("name=Ann&email=ann@x.com")
            .await;

        let json = response.json::<MessageResponse>();

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(json.message, "Please fill in all fields.");

        Ok(())
    }

    #[tokio::test]
    async fn test_contact_non_json_content_type() -> TestResult {
        let mut mailer = MockMailer::new();
        mailer.expect_send_email().times(0);

        let response = server(mailer)
            .post("/api/contact")
            .text(body().to_string())
            .await;

        let json = response.json::<MessageResponse>();

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(json.message, "Please fill in all fields.");

        Ok(())
    }

    #[tokio::test]
    async fn test_contact_json_array_body() -> TestResult {
        let mut mailer = MockMailer::new();
        mailer.expect_send_email().times(0);

        let response = server(mailer)
            .post("/api/contact")
            .json(&json!([body()]))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    async fn test_contact_transport_failure() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send_email()
            .times(1)
            .returning(|_| Err(MailerError::SendError(anyhow!("connection refused"))));

        let response = server(mailer).post("/api/contact").json(&body()).await;

        let json = response.json::<MessageResponse>();

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json.message,
            "Failed to send message. Please try again later."
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_contact_other_methods_not_allowed() -> TestResult {
        let mut contact = MockContactService::new();
        contact.expect_submit().times(0);

        let server = TestServer::new(router(test_state(Some(contact)), &test_config()))?;

        let responses = [
            server.get("/api/contact").await,
            server.put("/api/contact").json(&body()).await,
            server.patch("/api/contact").json(&body()).await,
            server.delete("/api/contact").await,
        ];

        for response in responses {
            let json = response.json::<MessageResponse>();

            assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(json.message, "Method Not Allowed");
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_contact_uses_configured_path() -> TestResult {
        let mut contact = MockContactService::new();
        contact.expect_submit().times(1).returning(|_| Ok(()));

        let config = HttpServerConfig {
            contact_path: "/contact".to_string(),
            ..test_config()
        };

        let server = TestServer::new(router(test_state(Some(contact)), &config))?;

        server.post("/contact").json(&body()).await.assert_status_ok();
        let response = server.post("/api/contact").json(&body()).await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
