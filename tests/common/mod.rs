#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderValue, Request, header};
use axum::response::Response;
use bearer_gate::error::RestError;
use bearer_gate::services::token::{RejectReason, TokenValidator, ValidateError, ValidatedToken};

type Respond = dyn Fn(&str) -> Result<ValidatedToken, ValidateError> + Send + Sync;

/// In-process token validator: answers from a closure and records every token it saw.
pub struct StubValidator {
    respond: Box<Respond>,
    seen: Mutex<Vec<String>>,
}

impl StubValidator {
    pub fn new(
        respond: impl Fn(&str) -> Result<ValidatedToken, ValidateError> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            respond: Box::new(respond),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn accepting(user_id: i64, role_code: i32) -> Arc<Self> {
        Self::new(move |_| Ok(ValidatedToken { user_id, role_code }))
    }

    pub fn infrastructure_fault() -> Arc<Self> {
        Self::new(|_| Err(ValidateError::Infrastructure("internal srv error".into())))
    }

    pub fn rejecting(reason: RejectReason) -> Arc<Self> {
        Self::new(move |_| Err(ValidateError::rejected(reason, "access_token not found")))
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().expect("seen lock").clone()
    }
}

#[async_trait]
impl TokenValidator for StubValidator {
    fn backend_name(&self) -> &'static str {
        "stub"
    }

    async fn validate(&self, token: &str) -> Result<ValidatedToken, ValidateError> {
        self.seen.lock().expect("seen lock").push(token.to_string());
        (self.respond)(token)
    }
}

pub fn request(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).expect("request")
}

/// Request whose `Authorization` value may carry non-ASCII (obs-text) bytes.
pub fn request_with_raw_authorization(uri: &str, authorization: &[u8]) -> Request<Body> {
    let value = HeaderValue::from_bytes(authorization).expect("header value");
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, value)
        .body(Body::empty())
        .expect("request")
}

pub async fn read_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body")
        .to_vec()
}

pub async fn read_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&read_bytes(response).await).expect("json")
}

pub async fn read_error(response: Response) -> RestError {
    RestError::from_bytes(&read_bytes(response).await).expect("rest error body")
}
