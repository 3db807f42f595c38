//! Drives the full router in-process for handler tests.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::{errors::Result, test_utils, web};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;

pub struct TestApp {
    pub state: web::AppState,
    router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub set_cookies: Vec<String>,
    pub body: String,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// `name=value` from a non-empty `Set-Cookie`, ready to send back in a `Cookie` header.
    pub fn cookie_pair(&self, name: &str) -> Option<String> {
        let prefix = format!("{name}=");
        self.set_cookies
            .iter()
            .filter(|c| c.starts_with(&prefix))
            .map(|c| c.split(';').next().unwrap_or_default().to_string())
            .find(|pair| pair.len() > prefix.len())
    }
}

impl TestApp {
    pub async fn new() -> Result<Self> {
        let state = test_utils::setup_test_state().await?;
        let router = web::router(state.clone());
        Ok(Self { state, router })
    }

    pub async fn get(&self, path: &str, cookie: Option<&str>) -> TestResponse {
        let mut request = Request::builder().method("GET").uri(path);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.send(request.body(Body::empty()).unwrap()).await
    }

    pub async fn post(&self, path: &str, body: &str, cookie: Option<&str>) -> TestResponse {
        let mut request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.send(request.body(Body::from(body.to_string())).unwrap())
            .await
    }

    /// Creates the user and logs in through `POST /login`, returning the session cookie pair.
    pub async fn login_as(&self, username: &str, email: &str, password: &str) -> Result<String> {
        test_utils::create_test_user(&self.state.db, username, email, password).await?;
        let body = format!("email={}&password={password}", email.replace('@', "%40"));
        let response = self.post("/login", &body, None).await;
        Ok(response
            .cookie_pair(web::session::SESSION_COOKIE)
            .expect("login should set a session cookie"))
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let set_cookies = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok().map(str::to_string))
            .collect();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            location,
            set_cookies,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}
