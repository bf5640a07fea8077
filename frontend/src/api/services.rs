use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, Service, ServicePayload},
};

impl ApiClient {
    pub async fn list_services(&self) -> Result<Vec<Service>, ApiError> {
        let url = self.endpoint("/services").await;
        Self::send_json(self.authorized(self.http_client().get(&url))?).await
    }

    pub async fn create_service(&self, payload: &ServicePayload) -> Result<Service, ApiError> {
        let url = self.endpoint("/services").await;
        Self::send_json(self.authorized(self.http_client().post(&url).json(payload))?).await
    }

    pub async fn update_service(
        &self,
        service_id: &str,
        payload: &ServicePayload,
    ) -> Result<Service, ApiError> {
        let url = self
            .endpoint(&format!("/services/{}", encode_segment(service_id)))
            .await;
        Self::send_json(self.authorized(self.http_client().put(&url).json(payload))?).await
    }

    pub async fn delete_service(&self, service_id: &str) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("/services/{}", encode_segment(service_id)))
            .await;
        Self::send_empty(self.authorized(self.http_client().delete(&url))?).await
    }
}
