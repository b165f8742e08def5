//! Typed REST calls against the back-office API.
//!
//! Every call goes through [`ApiClient`], which prefixes the configured API
//! url, applies the request timeout and attaches the session's bearer token.
//! Successful responses are wrapped in a `{ "data": ... }` envelope.

pub mod customers;
pub mod invoices;
pub mod master_data;
pub mod reports;
pub mod technicians;

use serde::Serialize;
use serde::de::DeserializeOwned;

use backoffice_utils::query::QueryString;

use crate::config::BusinessConfig;
use crate::http::{Client, HttpError, Method, RequestBuilder, Response};
use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] HttpError),
    #[error("API returned status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to decode response: {0}")]
    Decode(String),
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, serde::Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    config: BusinessConfig,
    session: Session,
}

impl ApiClient {
    pub fn new(config: BusinessConfig, session: Session) -> Self {
        Self { config, session }
    }

    pub fn config(&self) -> &BusinessConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Absolute url for an API path such as `/customers`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_url())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = Client::request(method, self.url(path))
            .header("accept", "application/json")
            .timeout(self.config.request_timeout());
        match self.session.token() {
            Some(token) => request.bearer(token),
            None => request,
        }
    }

    /// `GET {path}{query}` returning the enveloped list.
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryString,
    ) -> ApiResult<Vec<T>> {
        let response = self.request(Method::Get, path).query(query).send().await?;
        decode(path, &response)
    }

    /// `POST {path}` with an optional JSON body, returning the enveloped item.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<T> {
        let mut request = self.request(Method::Post, path);
        if let Some(body) = body {
            request = request
                .json(body)
                .map_err(|e| ApiError::Encode(e.to_string()))?;
        }
        let response = request.send().await?;
        decode(path, &response)
    }
}

fn decode<T: DeserializeOwned>(path: &str, response: &Response) -> ApiResult<T> {
    if !response.is_success() {
        let message = response
            .json::<ErrorBody>()
            .map(|body| body.message)
            .or_else(|_| response.text())
            .unwrap_or_default();
        log::warn!("{path} returned status {}: {message}", response.status);
        return Err(ApiError::Status {
            status: response.status,
            message,
        });
    }

    response
        .json::<Envelope<T>>()
        .map(|envelope| envelope.data)
        .map_err(|e| {
            log::error!("Failed to decode {path}: {e}");
            ApiError::Decode(e.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn response(status: u16, body: &str) -> Response {
        Response {
            status,
            headers: HashMap::new(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_decode_unwraps_envelope() {
        let data: Vec<u32> = decode("/x", &response(200, r#"{"data":[1,2,3]}"#)).unwrap();
        assert_eq!(data, [1, 2, 3]);
    }

    #[test]
    fn test_decode_reads_error_message() {
        let err = decode::<Vec<u32>>("/x", &response(422, r#"{"message":"NIK tidak valid"}"#))
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 422,
                message: "NIK tidak valid".to_owned()
            }
        );
    }

    #[test]
    fn test_decode_falls_back_to_body_text() {
        let err = decode::<Vec<u32>>("/x", &response(502, "Bad Gateway")).unwrap_err();
        assert_eq!(err.status(), Some(502));
        assert!(err.to_string().contains("Bad Gateway"));
    }

    #[test]
    fn test_decode_rejects_missing_envelope() {
        let err = decode::<Vec<u32>>("/x", &response(200, "[1,2]")).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_unauthorized() {
        let err = ApiError::Status {
            status: 401,
            message: String::new(),
        };
        assert!(err.is_unauthorized());
        assert!(!ApiError::Decode(String::new()).is_unauthorized());
    }

    #[test]
    fn test_url_joins_api_prefix() {
        let client = ApiClient::new(BusinessConfig::new("http://localhost:9000"), Session::anonymous());
        assert_eq!(client.url("/customers"), "http://localhost:9000/api/customers");
    }
}
