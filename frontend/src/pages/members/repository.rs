use crate::api::{ApiClient, ApiError, CreateMember, Member, UpdateMember};
use std::rc::Rc;

#[derive(Clone)]
pub struct MembersRepository {
    client: Rc<ApiClient>,
}

impl Default for MembersRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MembersRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_members(&self) -> Result<Vec<Member>, ApiError> {
        self.client.list_members().await
    }

    pub async fn create_member(&self, payload: CreateMember) -> Result<Member, ApiError> {
        self.client.create_member(&payload).await
    }

    pub async fn update_member(
        &self,
        member_id: String,
        payload: UpdateMember,
    ) -> Result<Member, ApiError> {
        self.client.update_member(&member_id, &payload).await
    }

    pub async fn delete_member(&self, member_id: String) -> Result<(), ApiError> {
        self.client.delete_member(&member_id).await
    }
}
