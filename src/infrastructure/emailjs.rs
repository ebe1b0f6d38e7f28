// SPDX-License-Identifier: MPL-2.0
//! EmailJS relay adapter.
//!
//! Posts contact form submissions to the EmailJS REST endpoint on behalf of
//! an [`EmailJsAccount`].
//!
//! EmailJS only accepts requests from non-browser clients when the account
//! enables "API access from non-browser environments".

use crate::application::port::{EmailRelay, RelayError};
use crate::domain::contact::FormSubmission;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde::Serialize;
use std::collections::BTreeMap;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("IcedFolio/", env!("CARGO_PKG_VERSION"));

/// JSON body expected by `POST /api/v1.0/email/send`.
#[derive(Debug, Serialize, PartialEq)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: BTreeMap<&'static str, String>,
}

/// Identifiers of the EmailJS service, template and account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsAccount {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Relay that delivers submissions through EmailJS.
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    client: reqwest::Client,
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailJsRelay {
    /// Builds a relay posting to `endpoint` for `account`.
    pub fn new(endpoint: impl Into<String>, account: EmailJsAccount) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            service_id: account.service_id,
            template_id: account.template_id,
            public_key: account.public_key,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Builds the request body for a submission.
    #[must_use]
    pub fn request_body<'a>(&'a self, submission: &FormSubmission) -> SendRequest<'a> {
        let template_params = submission
            .params()
            .into_iter()
            .map(|(name, value)| (name, value.to_string()))
            .collect();

        SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params,
        }
    }
}

impl EmailRelay for EmailJsRelay {
    fn send(&self, submission: FormSubmission) -> BoxFuture<'static, Result<(), RelayError>> {
        let body = serde_json::to_value(self.request_body(&submission));
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();

        async move {
            let body = body.map_err(|e| RelayError::Rejected(e.to_string()))?;

            tracing::debug!(%endpoint, "sending contact form submission");
            let response = client
                .post(&endpoint)
                .json(&body)
                .send()
                .await
                .map_err(|e| RelayError::Transport(e.to_string()))?;

            let status = response.status();
            if status.is_success() {
                return Ok(());
            }

            let body = response.text().await.unwrap_or_default();
            Err(RelayError::Status {
                code: status.as_u16(),
                body,
            })
        }
        .boxed()
    }
}

/// Stand-in used when the HTTP client cannot be built. Every submission is
/// rejected with the reason given at construction.
#[derive(Debug, Clone)]
pub struct DisabledRelay {
    reason: String,
}

impl DisabledRelay {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl EmailRelay for DisabledRelay {
    fn send(&self, _submission: FormSubmission) -> BoxFuture<'static, Result<(), RelayError>> {
        futures_util::future::ready(Err(RelayError::Rejected(self.reason.clone()))).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::FormFields;
    use httpmock::prelude::*;

    fn submission() -> FormSubmission {
        FormSubmission {
            fields: FormFields {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                message: "Hi!".into(),
            },
        }
    }

    fn account() -> EmailJsAccount {
        EmailJsAccount {
            service_id: "service_test".into(),
            template_id: "template_test".into(),
            public_key: "public_test".into(),
        }
    }

    fn relay_for(endpoint: String) -> EmailJsRelay {
        EmailJsRelay::new(endpoint, account()).expect("client builds")
    }

    #[test]
    fn request_body_carries_ids_and_wire_names() {
        let relay = relay_for("http://localhost/send".into());
        let body = serde_json::to_value(relay.request_body(&submission())).expect("serialize");

        assert_eq!(body["service_id"], "service_test");
        assert_eq!(body["template_id"], "template_test");
        assert_eq!(body["user_id"], "public_test");
        assert_eq!(body["template_params"]["user_name"], "Ada");
        assert_eq!(body["template_params"]["user_email"], "ada@example.com");
        assert_eq!(body["template_params"]["message"], "Hi!");
    }

    #[tokio::test]
    async fn success_status_resolves_ok() {
        let server = MockServer::start_async().await;
        let mock = server.mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1.0/email/send")
                .json_body_partial(r#"{"template_params":{"user_name":"Ada"}}"#);
            then.status(200).body("OK");
        })
        .await;

        let relay = relay_for(server.url("/api/v1.0/email/send"));
        relay.send(submission()).await.expect("relay accepts");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let server = MockServer::start_async().await;
        server.mock_async(|when, then| {
            when.method(POST).path("/api/v1.0/email/send");
            then.status(400).body("The Public Key is invalid");
        })
        .await;

        let relay = relay_for(server.url("/api/v1.0/email/send"));
        let err = relay.send(submission()).await.expect_err("relay rejects");
        assert_eq!(
            err,
            RelayError::Status {
                code: 400,
                body: "The Public Key is invalid".into()
            }
        );
    }

    #[tokio::test]
    async fn disabled_relay_rejects_everything() {
        let relay = DisabledRelay::new("no TLS backend");
        let err = relay.send(submission()).await.expect_err("always rejects");
        assert_eq!(err, RelayError::Rejected("no TLS backend".into()));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let relay = relay_for("http://127.0.0.1:9/api/v1.0/email/send".into());
        let err = relay.send(submission()).await.expect_err("no server");
        assert!(matches!(err, RelayError::Transport(_)));
    }
}
