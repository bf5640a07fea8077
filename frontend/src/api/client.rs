use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    api::types::ApiError,
    config,
    utils::{navigation, storage},
};

const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: Some(base_url.trim_end_matches('/').to_string()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    pub(crate) fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let token = storage::session_token()
            .ok_or_else(|| ApiError::unauthorized("Please sign in to continue"))?;
        Ok(request.bearer_auth(token))
    }

    pub(crate) fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            storage::clear_session();
            navigation::redirect_to_login_if_needed();
        }
    }

    async fn dispatch(request: RequestBuilder) -> Result<(StatusCode, String), ApiError> {
        let response = request.send().await.map_err(|e| {
            log::warn!("request failed: {}", e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })?;
        let status = response.status();
        Self::handle_unauthorized_status(status);
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to read response: {}", e)))?;
        if status.is_success() {
            Ok((status, body))
        } else {
            let error = ApiError::from_response(status.as_u16(), &body);
            log::warn!("request returned {}: {}", status.as_u16(), error.error);
            Err(error)
        }
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let (_, body) = Self::dispatch(request).await?;
        serde_json::from_str(&body)
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    pub(crate) async fn send_empty(request: RequestBuilder) -> Result<(), ApiError> {
        Self::dispatch(request).await.map(|_| ())
    }
}

pub(crate) fn encode_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::encode_segment;

    #[test]
    fn encode_segment_escapes_reserved_characters() {
        assert_eq!(encode_segment("svc-01_a.b"), "svc-01_a.b");
        assert_eq!(encode_segment("a/b c"), "a%2Fb%20c");
        assert_eq!(encode_segment("../x"), "..%2Fx");
    }
}
