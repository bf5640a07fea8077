use reqwest::multipart::{Form, Part};

use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, ContentUpload, ServiceContent},
};

impl ApiClient {
    pub async fn list_contents(&self, service_id: &str) -> Result<Vec<ServiceContent>, ApiError> {
        let url = self
            .endpoint(&format!("/services/{}/contents", encode_segment(service_id)))
            .await;
        Self::send_json(self.authorized(self.http_client().get(&url))?).await
    }

    pub async fn upload_content(&self, upload: &ContentUpload) -> Result<ServiceContent, ApiError> {
        let url = self.endpoint("/contents").await;
        let file_part = Part::bytes(upload.file.bytes.clone())
            .file_name(upload.file.name.clone())
            .mime_str(&upload.file.mime_type)
            .map_err(|e| ApiError::validation(format!("Unsupported file type: {}", e)))?;
        let mut form = Form::new()
            .text("service_id", upload.service_id.clone())
            .text("title", upload.title.clone());
        if let Some(description) = upload.description.clone() {
            form = form.text("description", description);
        }
        let form = form.part("file", file_part);
        Self::send_json(self.authorized(self.http_client().post(&url).multipart(form))?).await
    }

    pub async fn delete_content(&self, content_id: &str) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("/contents/{}", encode_segment(content_id)))
            .await;
        Self::send_empty(self.authorized(self.http_client().delete(&url))?).await
    }
}
