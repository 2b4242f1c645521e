// src/core/net.rs
// Blocking HTTP GET (reqwest). The `Fetch` trait is the seam the pipeline depends on.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde_json::Value;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

pub trait Fetch {
    /// Body of a page as text.
    fn get_text(&self, url: &str) -> Result<String>;

    /// Body of a page decoded as JSON.
    fn get_json(&self, url: &str) -> Result<Value>;
}

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<Response> {
        logd!("GET {url}");
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Http { status: status.as_u16(), url: s!(url) });
        }
        Ok(resp)
    }
}

impl Fetch for HttpClient {
    fn get_text(&self, url: &str) -> Result<String> {
        Ok(self.get(url)?.text()?)
    }

    fn get_json(&self, url: &str) -> Result<Value> {
        // Decode through serde_json so a bad body surfaces as `Error::Json`.
        let body = self.get(url)?.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}
