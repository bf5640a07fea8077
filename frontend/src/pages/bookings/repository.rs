use crate::api::{
    ApiClient, ApiError, Booking, BookingQuery, BookingStatus, CreateBooking, Service,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct BookingsRepository {
    client: Rc<ApiClient>,
}

impl Default for BookingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingsRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_bookings(&self, query: BookingQuery) -> Result<Vec<Booking>, ApiError> {
        self.client.list_bookings(&query).await
    }

    pub async fn fetch_services(&self) -> Result<Vec<Service>, ApiError> {
        self.client.list_services().await
    }

    pub async fn create_booking(&self, payload: CreateBooking) -> Result<Booking, ApiError> {
        self.client.create_booking(&payload).await
    }

    pub async fn update_status(
        &self,
        booking: Booking,
        next: BookingStatus,
    ) -> Result<Booking, ApiError> {
        self.client
            .update_booking_status(&booking.id, booking.status, next)
            .await
    }
}
