//! HTTP Handlers

use axum::Form;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::client::{SignupApi, SignupReply};
use crate::form::SignupForm;
use crate::pages::{
    NETWORK_FAILURE, SIGNUP_FAILED, SignupView, render_setup_profile_page, render_signup_page,
};

/// Where a successful signup lands
pub const SETUP_PROFILE_PATH: &str = "/setup-profile";

/// Shared state for page handlers
pub struct WebAppState<A>
where
    A: SignupApi + Send + Sync + 'static,
{
    pub api: Arc<A>,
}

impl<A> Clone for WebAppState<A>
where
    A: SignupApi + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
        }
    }
}

fn form_with_error(form: &SignupForm, error: &str) -> Response {
    Html(render_signup_page(&SignupView {
        username: &form.username,
        email: &form.email,
        error: Some(error),
    }))
    .into_response()
}

// ============================================================================
// Sign Up
// ============================================================================

/// GET /signup
pub async fn signup_page() -> Html<String> {
    Html(render_signup_page(&SignupView::default()))
}

/// POST /signup
pub async fn submit_signup<A>(
    State(state): State<WebAppState<A>>,
    Form(form): Form<SignupForm>,
) -> Response
where
    A: SignupApi + Send + Sync + 'static,
{
    if let Err(e) = form.validate() {
        return form_with_error(&form, &e.to_string());
    }

    match state.api.sign_up(&form.to_payload()).await {
        Ok(SignupReply::Created { cookies }) => {
            tracing::info!(user_name = %form.username, "Signup accepted");

            let mut response = Redirect::to(SETUP_PROFILE_PATH).into_response();
            for cookie in cookies {
                response.headers_mut().append(header::SET_COOKIE, cookie);
            }
            response
        }
        Ok(SignupReply::Rejected { status, message }) => {
            tracing::debug!(status, user_name = %form.username, "Signup rejected");
            form_with_error(&form, message.as_deref().unwrap_or(SIGNUP_FAILED))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Signup endpoint unreachable");
            form_with_error(&form, NETWORK_FAILURE)
        }
    }
}

// ============================================================================
// Setup Profile
// ============================================================================

/// GET /setup-profile
pub async fn setup_profile_page() -> Html<String> {
    Html(render_setup_profile_page())
}
