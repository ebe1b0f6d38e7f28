// SPDX-License-Identifier: MPL-2.0
//! Email relay port definition.
//!
//! The relay is an opaque collaborator: it either accepts a submission or
//! rejects it. No retry, backoff, or timeout policy lives behind this trait.

use crate::domain::contact::FormSubmission;
use futures_util::future::BoxFuture;
use std::fmt;

/// Reasons a submission was not accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// The request never produced a response (DNS, TLS, connection reset...).
    Transport(String),
    /// The service answered with a non-success HTTP status.
    Status { code: u16, body: String },
    /// The relay refused the submission before sending it.
    Rejected(String),
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::Transport(msg) => write!(f, "transport failure: {msg}"),
            RelayError::Status { code, body } => write!(f, "relay answered {code}: {body}"),
            RelayError::Rejected(msg) => write!(f, "submission rejected: {msg}"),
        }
    }
}

impl std::error::Error for RelayError {}

/// Port for delivering contact form submissions.
pub trait EmailRelay: Send + Sync {
    /// Sends one submission. Resolves once the relay has accepted or
    /// rejected it.
    fn send(&self, submission: FormSubmission) -> BoxFuture<'static, Result<(), RelayError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_code() {
        let err = RelayError::Status {
            code: 400,
            body: "The user ID is invalid".into(),
        };
        let text = err.to_string();
        assert!(text.contains("400"));
        assert!(text.contains("user ID"));
    }
}
