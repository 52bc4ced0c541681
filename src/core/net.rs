// src/core/net.rs
// Plain HTTP GET for endpoints that return raw markup (no rendering needed).

use std::time::Duration;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::NetError;

pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can answer a GET. Tests plug in canned responses.
pub trait HttpGet {
    fn get(&self, url: &str) -> Result<HttpResponse, NetError>;
}

pub struct HttpClient {
    inner: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, NetError> {
        let inner = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { inner })
    }
}

impl HttpGet for HttpClient {
    fn get(&self, url: &str) -> Result<HttpResponse, NetError> {
        let resp = self.inner.get(url).send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        Ok(HttpResponse { status, body })
    }
}
