use crate::api::{
    AmountSummary, ApiClient, ApiError, BookingCounts, DashboardCounts, DateRange, Service,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl Default for DashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_valid(range: &DateRange) -> Result<(), ApiError> {
    if range.is_valid() {
        Ok(())
    } else {
        Err(ApiError::validation("The start date must not be after the end date"))
    }
}

impl DashboardRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_counts(&self) -> Result<DashboardCounts, ApiError> {
        self.client.get_counts().await
    }

    pub async fn fetch_amounts(&self, range: DateRange) -> Result<AmountSummary, ApiError> {
        ensure_valid(&range)?;
        self.client.get_amounts(&range).await
    }

    pub async fn fetch_booking_counts(&self, range: DateRange) -> Result<BookingCounts, ApiError> {
        ensure_valid(&range)?;
        self.client.get_booking_counts(&range).await
    }

    pub async fn fetch_services(&self) -> Result<Vec<Service>, ApiError> {
        self.client.list_services().await
    }
}
