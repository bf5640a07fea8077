use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, CreateMember, Member, UpdateMember},
};

impl ApiClient {
    pub async fn list_members(&self) -> Result<Vec<Member>, ApiError> {
        let url = self.endpoint("/members").await;
        Self::send_json(self.authorized(self.http_client().get(&url))?).await
    }

    pub async fn create_member(&self, payload: &CreateMember) -> Result<Member, ApiError> {
        let url = self.endpoint("/members").await;
        Self::send_json(self.authorized(self.http_client().post(&url).json(payload))?).await
    }

    pub async fn update_member(
        &self,
        member_id: &str,
        payload: &UpdateMember,
    ) -> Result<Member, ApiError> {
        let url = self
            .endpoint(&format!("/members/{}", encode_segment(member_id)))
            .await;
        Self::send_json(self.authorized(self.http_client().put(&url).json(payload))?).await
    }

    pub async fn delete_member(&self, member_id: &str) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("/members/{}", encode_segment(member_id)))
            .await;
        Self::send_empty(self.authorized(self.http_client().delete(&url))?).await
    }
}
