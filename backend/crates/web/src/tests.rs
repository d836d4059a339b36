//! Page-level tests for the signup form
//! Stubbed API for form behavior; a local axum server for the HTTP client.

#[cfg(test)]
mod support {
    use std::sync::{Arc, Mutex};

    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{HeaderValue, Request, Response, header};
    use tower::ServiceExt;

    use crate::client::{ClientError, HttpSignupApi, SignupApi, SignupReply};
    use crate::form::SignupPayload;
    use crate::router::web_router_generic;

    /// Canned reply; `None` means "fall through to a real, unreachable endpoint"
    #[derive(Clone)]
    pub struct StubApi {
        pub reply: Option<SignupReply>,
        pub calls: Arc<Mutex<Vec<SignupPayload>>>,
    }

    impl StubApi {
        pub fn replying(reply: SignupReply) -> Self {
            Self {
                reply: Some(reply),
                calls: Arc::default(),
            }
        }

        pub fn unreachable() -> Self {
            Self {
                reply: None,
                calls: Arc::default(),
            }
        }

        pub fn calls(&self) -> Vec<SignupPayload> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl SignupApi for StubApi {
        async fn sign_up(&self, payload: &SignupPayload) -> Result<SignupReply, ClientError> {
            self.calls.lock().unwrap().push(payload.clone());
            match &self.reply {
                Some(reply) => Ok(reply.clone()),
                None => {
                    let port = closed_port().await;
                    HttpSignupApi::new(&format!("http://127.0.0.1:{port}"))
                        .sign_up(payload)
                        .await
                }
            }
        }
    }

    /// A local port nothing listens on
    pub async fn closed_port() -> u16 {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        port
    }

    /// Serve `router` on an ephemeral port, returning its base URL
    pub async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    pub fn cookie(value: &'static str) -> HeaderValue {
        HeaderValue::from_static(value)
    }

    pub async fn submit(api: StubApi, form: &[(&str, &str)]) -> Response<Body> {
        let body = form
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        let request = Request::builder()
            .method("POST")
            .uri("/signup")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        web_router_generic(api).oneshot(request).await.unwrap()
    }

    pub async fn get(api: StubApi, uri: &str) -> Response<Body> {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        web_router_generic(api).oneshot(request).await.unwrap()
    }

    pub async fn body_text(response: Response<Body>) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }
}

#[cfg(test)]
mod form_tests {
    use super::support::*;
    use crate::client::SignupReply;
    use axum::http::{StatusCode, header};

    fn created() -> SignupReply {
        SignupReply::Created {
            cookies: vec![cookie("token=abc; HttpOnly; SameSite=Strict; Path=/; Max-Age=604800")],
        }
    }

    #[tokio::test]
    async fn test_get_signup_renders_form() {
        let response = get(StubApi::replying(created()), "/signup").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Create Your Account"));
        assert!(html.contains(r#"action="/signup""#));
    }

    #[tokio::test]
    async fn test_password_mismatch_makes_no_request() {
        let api = StubApi::replying(created());

        let response = submit(
            api.clone(),
            &[
                ("username", "alice"),
                ("email", ""),
                ("password", "a"),
                ("confirm_password", "b"),
            ],
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Passwords do not match"));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_success_redirects_with_cookie() {
        let api = StubApi::replying(created());

        let response = submit(
            api.clone(),
            &[
                ("username", "alice"),
                ("email", "a%40x.io"),
                ("password", "pw"),
                ("confirm_password", "pw"),
            ],
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/setup-profile");
        assert!(
            response.headers()[header::SET_COOKIE]
                .to_str()
                .unwrap()
                .starts_with("token=abc")
        );

        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].username, "alice");
        assert_eq!(calls[0].email.as_deref(), Some("a@x.io"));
        assert_eq!(calls[0].password, "pw");
    }

    #[tokio::test]
    async fn test_blank_email_not_sent() {
        let api = StubApi::replying(created());

        submit(
            api.clone(),
            &[
                ("username", "alice"),
                ("email", "+++"),
                ("password", "pw"),
                ("confirm_password", "pw"),
            ],
        )
        .await;

        // "+++" decodes to three spaces
        assert_eq!(api.calls()[0].email, None);
    }

    #[tokio::test]
    async fn test_server_message_displayed() {
        let api = StubApi::replying(SignupReply::Rejected {
            status: 409,
            message: Some("User already exists".to_string()),
        });

        let response = submit(
            api,
            &[
                ("username", "alice"),
                ("password", "pw"),
                ("confirm_password", "pw"),
            ],
        )
        .await;
        let html = body_text(response).await;
        assert!(html.contains("User already exists"));
        // Typed username survives, passwords do not
        assert!(html.contains(r#"value="alice""#));
        assert!(!html.contains(r#"value="pw""#));
    }

    #[tokio::test]
    async fn test_missing_message_falls_back() {
        let api = StubApi::replying(SignupReply::Rejected {
            status: 500,
            message: None,
        });

        let response = submit(
            api,
            &[
                ("username", "alice"),
                ("password", "pw"),
                ("confirm_password", "pw"),
            ],
        )
        .await;
        assert!(body_text(response).await.contains("Signup failed"));
    }

    #[tokio::test]
    async fn test_network_failure_message() {
        let api = StubApi::unreachable();

        let response = submit(
            api.clone(),
            &[
                ("username", "alice"),
                ("password", "pw"),
                ("confirm_password", "pw"),
            ],
        )
        .await;
        assert!(
            body_text(response)
                .await
                .contains("Something went wrong. Please try again later.")
        );
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_setup_profile_page() {
        let response = get(StubApi::replying(created()), "/setup-profile").await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[cfg(test)]
mod http_client_tests {
    use super::support::*;
    use crate::client::{ClientError, HttpSignupApi, SignupApi, SignupReply};
    use crate::form::SignupPayload;
    use axum::Json;
    use axum::http::{StatusCode, header};
    use axum::response::IntoResponse;
    use axum::routing::post;
    use axum::{Router, body::Bytes};
    use serde_json::{Value, json};

    fn payload(email: Option<&str>) -> SignupPayload {
        SignupPayload {
            username: "alice".to_string(),
            email: email.map(str::to_string),
            password: "pw".to_string(),
        }
    }

    #[tokio::test]
    async fn test_created_forwards_cookies() {
        let endpoint = Router::new().route(
            "/api/auth/signup",
            post(|| async {
                (
                    [(header::SET_COOKIE, "token=jwt; HttpOnly")],
                    Json(json!({ "message": "User created", "userId": "u1" })),
                )
            }),
        );
        let api = HttpSignupApi::new(&serve(endpoint).await);

        match api.sign_up(&payload(None)).await.unwrap() {
            SignupReply::Created { cookies } => {
                assert_eq!(cookies.len(), 1);
                assert_eq!(cookies[0], "token=jwt; HttpOnly");
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_sends_json_without_blank_email() {
        let endpoint = Router::new().route(
            "/api/auth/signup",
            post(|body: Bytes| async move {
                let value: Value = serde_json::from_slice(&body).unwrap();
                // Echo the received body back as the rejection message
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "message": value.to_string() })),
                )
                    .into_response()
            }),
        );
        let api = HttpSignupApi::new(&serve(endpoint).await);

        match api.sign_up(&payload(None)).await.unwrap() {
            SignupReply::Rejected { status, message } => {
                assert_eq!(status, 400);
                let echoed: Value = serde_json::from_str(&message.unwrap()).unwrap();
                assert_eq!(echoed, json!({ "username": "alice", "password": "pw" }));
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rejection_message_parsed() {
        let endpoint = Router::new().route(
            "/api/auth/signup",
            post(|| async {
                (
                    StatusCode::CONFLICT,
                    Json(json!({ "message": "User already exists" })),
                )
            }),
        );
        let api = HttpSignupApi::new(&serve(endpoint).await);

        match api.sign_up(&payload(Some("a@x.io"))).await.unwrap() {
            SignupReply::Rejected { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message.as_deref(), Some("User already exists"));
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unparsable_rejection_has_no_message() {
        let endpoint = Router::new().route(
            "/api/auth/signup",
            post(|| async { (StatusCode::BAD_GATEWAY, "<html>upstream down</html>") }),
        );
        let api = HttpSignupApi::new(&serve(endpoint).await);

        match api.sign_up(&payload(None)).await.unwrap() {
            SignupReply::Rejected { status, message } => {
                assert_eq!(status, 502);
                assert!(message.is_none());
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let port = closed_port().await;
        let api = HttpSignupApi::new(&format!("http://127.0.0.1:{port}"));

        let result = api.sign_up(&payload(None)).await;
        assert!(matches!(result, Err(ClientError::Network(_))));
    }
}
