use reqwest::{Client, Method, StatusCode};

use crate::store::tiered::BlobStore;

/// Remote tier over any object store that speaks plain HTTP GET/PUT/HEAD on
/// `{base_url}/{key}`.
#[derive(Debug, Clone)]
pub struct HttpBlobStore {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBlobStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpBlobStore {
            client: Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), key)
    }

    fn request(&self, method: Method, key: &str) -> reqwest::RequestBuilder {
        let mut req = self.client.request(method, self.object_url(key));
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }
}

impl BlobStore for HttpBlobStore {
    async fn exists(&self, key: &str) -> anyhow::Result<bool> {
        let resp = self
            .request(Method::HEAD, key)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, key, "Failed to make http request"))?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !resp.status().is_success() {
            anyhow::bail!("HEAD {} returned {}", key, resp.status());
        }
        Ok(true)
    }

    async fn download(&self, key: &str) -> anyhow::Result<Option<Vec<u8>>> {
        let resp = self
            .request(Method::GET, key)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, key, "Failed to make http request"))?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            let status = resp.status();
            let message = resp.text().await.unwrap_or_default();
            anyhow::bail!("GET {key} returned {status}: {message}");
        }
        Ok(Some(resp.bytes().await?.to_vec()))
    }

    async fn upload(&self, key: &str, bytes: &[u8]) -> anyhow::Result<()> {
        let resp = self
            .request(Method::PUT, key)
            .body(bytes.to_vec())
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, key, "Failed to make http request"))?;
        if !resp.status().is_success() {
            let status = resp.status();
            let message = resp.text().await.unwrap_or_default();
            anyhow::bail!("PUT {key} returned {status}: {message}");
        }
        Ok(())
    }
}
