use crate::api::{ApiClient, ApiError, ContentUpload, Service, ServiceContent};
use crate::utils::file::read_upload_file;
use std::rc::Rc;

/// Upload input as picked in the form; the file bytes are read at send time.
#[derive(Clone)]
pub struct ContentDraft {
    pub service_id: String,
    pub title: String,
    pub description: Option<String>,
    pub file: web_sys::File,
}

#[derive(Clone)]
pub struct ContentsRepository {
    client: Rc<ApiClient>,
}

impl Default for ContentsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentsRepository {
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

    pub async fn fetch_contents(&self, service_id: String) -> Result<Vec<ServiceContent>, ApiError> {
        self.client.list_contents(&service_id).await
    }

    pub async fn upload(&self, draft: ContentDraft) -> Result<ServiceContent, ApiError> {
        let file = read_upload_file(&draft.file).await?;
        self.client
            .upload_content(&ContentUpload {
                service_id: draft.service_id,
                title: draft.title,
                description: draft.description,
                file,
            })
            .await
    }

    pub async fn delete_content(&self, content_id: String) -> Result<(), ApiError> {
        self.client.delete_content(&content_id).await
    }
}
