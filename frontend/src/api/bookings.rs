use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, Booking, BookingQuery, BookingStatus, CreateBooking, UpdateBookingStatus},
};

impl ApiClient {
    pub async fn list_bookings(&self, query: &BookingQuery) -> Result<Vec<Booking>, ApiError> {
        let url = self.endpoint("/bookings").await;
        let params = query.to_params();
        let mut request = self.http_client().get(&url);
        if !params.is_empty() {
            request = request.query(&params);
        }
        Self::send_json(self.authorized(request)?).await
    }

    pub async fn create_booking(&self, payload: &CreateBooking) -> Result<Booking, ApiError> {
        let url = self.endpoint("/bookings").await;
        Self::send_json(self.authorized(self.http_client().post(&url).json(payload))?).await
    }

    pub async fn update_booking_status(
        &self,
        booking_id: &str,
        current: BookingStatus,
        next: BookingStatus,
    ) -> Result<Booking, ApiError> {
        if !current.can_transition_to(next) {
            return Err(ApiError::validation(format!(
                "A {} booking cannot be marked {}",
                current.label().to_lowercase(),
                next.label().to_lowercase()
            )));
        }
        let url = self
            .endpoint(&format!("/bookings/{}/status", encode_segment(booking_id)))
            .await;
        let body = UpdateBookingStatus { status: next };
        Self::send_json(self.authorized(self.http_client().put(&url).json(&body))?).await
    }
}
