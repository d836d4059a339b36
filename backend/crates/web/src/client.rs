//! Signup API Client
//!
//! The form talks to the signup endpoint over HTTP, the way a browser would.
//! [`SignupApi`] is the seam; [`HttpSignupApi`] is the reqwest implementation.

use axum::http::HeaderValue;
use reqwest::header::SET_COOKIE;
use serde::Deserialize;
use thiserror::Error;

use crate::form::SignupPayload;

/// Path of the signup endpoint, relative to the API base URL
pub const SIGNUP_PATH: &str = "/api/auth/signup";

/// No response was obtained
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("signup service unreachable: {0}")]
    Network(#[from] reqwest::Error),
}

/// What the endpoint answered
#[derive(Debug, Clone)]
pub enum SignupReply {
    /// 2xx; `Set-Cookie` values to hand to the browser
    Created { cookies: Vec<HeaderValue> },
    /// Any other status, with the `message` field when the body had one
    Rejected { status: u16, message: Option<String> },
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Signup API trait
#[trait_variant::make(SignupApi: Send)]
pub trait LocalSignupApi {
    async fn sign_up(&self, payload: &SignupPayload) -> Result<SignupReply, ClientError>;
}

/// reqwest-backed client
#[derive(Debug, Clone)]
pub struct HttpSignupApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSignupApi {
    /// `base_url` is the origin serving `/api/auth/signup`
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), SIGNUP_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SignupApi for HttpSignupApi {
    async fn sign_up(&self, payload: &SignupPayload) -> Result<SignupReply, ClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let cookies = response
                .headers()
                .get_all(SET_COOKIE)
                .iter()
                .cloned()
                .collect();
            return Ok(SignupReply::Created { cookies });
        }

        // An unreadable body is not a network failure: the server did answer
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message.filter(|m| !m.is_empty()),
            Err(e) => {
                tracing::debug!(error = %e, status = status.as_u16(), "Unparsable signup error body");
                None
            }
        };

        Ok(SignupReply::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
