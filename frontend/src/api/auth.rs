use serde_json::json;

use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse, Session},
};
use crate::utils::storage;

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("/auth/login").await;
        let response: LoginResponse =
            Self::send_json(self.http_client().post(&url).json(&request)).await?;
        storage::save_session(&Session::from(response.clone())).map_err(ApiError::unknown)?;
        log::info!("signed in as {}", response.user.email);
        Ok(response)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let url = self.endpoint("/auth/logout").await;
        let result = match self.authorized(self.http_client().post(&url).json(&json!({}))) {
            Ok(request) => Self::send_empty(request).await,
            Err(err) => Err(err),
        };
        storage::clear_session();
        if let Err(err) = &result {
            log::warn!("sign-out request failed, local session cleared anyway: {}", err);
        } else {
            log::info!("signed out");
        }
        result
    }
}
