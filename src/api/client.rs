use crate::types::{ChatReply, ChatRequest, DashboardSummary};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

// ============================================
// Error Types
// ============================================

/// Anything that can go wrong talking to the backend. The interface treats
/// every variant the same way; only the logged text differs.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid backend URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned {status}: {detail}")]
    Status { status: StatusCode, detail: String },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

// ============================================
// Backend Trait
// ============================================

// Browser fetch futures are not `Send`.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait CertificateApi: Send + Sync {
    /// `GET /api/dashboard`
    async fn dashboard(&self) -> ApiResult<DashboardSummary>;

    /// `POST /api/chat` with `{ "message": ... }`
    async fn chat(&self, message: &str) -> ApiResult<ChatReply>;
}

// ============================================
// HTTP Implementation
// ============================================

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct HttpCertificateApi {
    client: Client,
    base_url: Url,
}

impl HttpCertificateApi {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        Ok(Self::with_base_url(parse_base_url(base_url)?))
    }

    pub fn with_base_url(mut base_url: Url) -> Self {
        // `Url::join` drops the last segment unless the path ends with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|err| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: err.to_string(),
            })
    }
}

fn parse_base_url(raw: &str) -> ApiResult<Url> {
    let invalid = |reason: String| ApiError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw.trim()).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    Ok(url)
}

/// Reads the body and turns it into `T`, or into `ApiError::Status` for any
/// non-2xx response.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        let detail = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.error,
            Err(_) => body,
        };
        return Err(ApiError::Status { status, detail });
    }
    Ok(serde_json::from_str(&body)?)
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl CertificateApi for HttpCertificateApi {
    async fn dashboard(&self) -> ApiResult<DashboardSummary> {
        let url = self.endpoint("api/dashboard")?;
        tracing::debug!(%url, "fetching dashboard summary");
        let response = self.client.get(url).send().await?;
        read_json(response).await
    }

    async fn chat(&self, message: &str) -> ApiResult<ChatReply> {
        let url = self.endpoint("api/chat")?;
        tracing::debug!(%url, chars = message.chars().count(), "posting chat message");
        let response = self
            .client
            .post(url)
            .json(&ChatRequest { message })
            .send()
            .await?;
        read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        let api = HttpCertificateApi::new("http://localhost:5000/backend").unwrap();
        assert_eq!(
            api.endpoint("api/chat").unwrap().as_str(),
            "http://localhost:5000/backend/api/chat"
        );
        let root = HttpCertificateApi::new("http://localhost:5000").unwrap();
        assert_eq!(
            root.endpoint("api/dashboard").unwrap().as_str(),
            "http://localhost:5000/api/dashboard"
        );
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(matches!(
            parse_base_url("ftp://example.com"),
            Err(ApiError::InvalidBaseUrl { .. })
        ));
        assert!(parse_base_url("not a url").is_err());
    }
}
