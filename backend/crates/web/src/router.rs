//! Web Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::client::{HttpSignupApi, SignupApi};
use crate::handlers::{self, WebAppState};

/// Create the page router talking to the signup endpoint at `api_base_url`
pub fn web_router(api_base_url: &str) -> Router {
    web_router_generic(HttpSignupApi::new(api_base_url))
}

/// Create a page router for any signup API implementation
pub fn web_router_generic<A>(api: A) -> Router
where
    A: SignupApi + Send + Sync + 'static,
{
    let state = WebAppState { api: Arc::new(api) };

    Router::new()
        .route(
            "/signup",
            get(handlers::signup_page).post(handlers::submit_signup::<A>),
        )
        .route("/setup-profile", get(handlers::setup_profile_page))
        .with_state(state)
}
