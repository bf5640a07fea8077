use super::{
    client::ApiClient,
    types::{AmountSummary, ApiError, BookingCounts, DashboardCounts, DateRange},
};

impl ApiClient {
    pub async fn get_counts(&self) -> Result<DashboardCounts, ApiError> {
        let url = self.endpoint("/dashboard/counts").await;
        Self::send_json(self.authorized(self.http_client().get(&url))?).await
    }

    pub async fn get_amounts(&self, range: &DateRange) -> Result<AmountSummary, ApiError> {
        let url = self.endpoint("/dashboard/amounts").await;
        let params = range.to_params();
        let mut request = self.http_client().get(&url);
        if !params.is_empty() {
            request = request.query(&params);
        }
        Self::send_json(self.authorized(request)?).await
    }

    pub async fn get_booking_counts(&self, range: &DateRange) -> Result<BookingCounts, ApiError> {
        let url = self.endpoint("/bookings/counts").await;
        let params = range.to_params();
        let mut request = self.http_client().get(&url);
        if !params.is_empty() {
            request = request.query(&params);
        }
        Self::send_json(self.authorized(request)?).await
    }
}
