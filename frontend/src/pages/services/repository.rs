use crate::api::{ApiClient, ApiError, Service, ServicePayload};
use std::rc::Rc;

#[derive(Clone)]
pub struct ServicesRepository {
    client: Rc<ApiClient>,
}

impl Default for ServicesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ServicesRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_services(&self) -> Result<Vec<Service>, ApiError> {
        self.client.list_services().await
    }

    /// Creates when `service_id` is `None`, updates otherwise.
    pub async fn save_service(
        &self,
        service_id: Option<String>,
        payload: ServicePayload,
    ) -> Result<Service, ApiError> {
        match service_id {
            Some(id) => self.client.update_service(&id, &payload).await,
            None => self.client.create_service(&payload).await,
        }
    }

    pub async fn toggle_active(&self, service: Service) -> Result<Service, ApiError> {
        let mut payload = ServicePayload::from(&service);
        payload.is_active = !service.is_active;
        self.client.update_service(&service.id, &payload).await
    }

    pub async fn delete_service(&self, service_id: String) -> Result<(), ApiError> {
        self.client.delete_service(&service_id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{service, sign_in};
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn toggle_active_sends_flipped_flag() {
        sign_in();
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/services/svc-1")
                    .json_body_partial(r#"{ "is_active": false, "name": "Yoga" }"#);
                then.status(200).json_body(json!({
                    "id": "svc-1",
                    "name": "Yoga",
                    "price": 100.0,
                    "is_active": false
                }));
            })
            .await;
        let repo =
            ServicesRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(server.url("/api"))));
        let updated = repo.toggle_active(service("svc-1", "Yoga")).await.unwrap();
        assert!(!updated.is_active);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn save_service_creates_without_id() {
        sign_in();
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/services");
                then.status(201).json_body(json!({ "id": "svc-new", "name": "Pilates" }));
            })
            .await;
        let repo =
            ServicesRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(server.url("/api"))));
        let payload = ServicePayload::from(&service("", "Pilates"));
        let created = repo.save_service(None, payload).await.unwrap();
        assert_eq!(created.id, "svc-new");
        assert!(created.is_active);
        mock.assert_async().await;
    }
}
