use chrono::{DateTime, NaiveDate, Utc};
use leptos::{IntoView, View};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    Admin,
    #[default]
    #[serde(alias = "user", alias = "staff")]
    Regular,
}

impl MemberRole {
    pub const ALL: [MemberRole; 2] = [MemberRole::Admin, MemberRole::Regular];

    pub fn is_admin(self) -> bool {
        matches!(self, MemberRole::Admin)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MemberRole::Admin => "admin",
            MemberRole::Regular => "regular",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MemberRole::Admin => "Administrator",
            MemberRole::Regular => "Regular",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(MemberRole::Admin),
            "regular" | "user" | "staff" => Some(MemberRole::Regular),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: MemberRole,
}

/// The single blob kept in local storage for the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Self {
            token: response.token,
            user: response.user,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePayload {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: f64,
    pub capacity: Option<u32>,
    pub is_active: bool,
}

impl From<&Service> for ServicePayload {
    fn from(service: &Service) -> Self {
        Self {
            name: service.name.clone(),
            description: service.description.clone(),
            category: service.category.clone(),
            price: service.price,
            capacity: service.capacity,
            is_active: service.is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: MemberRole,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMember {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: MemberRole,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateMember {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: MemberRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Decoded case-insensitively through [`BookingStatus::parse`]; anything else,
/// or a missing field, is `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Paid,
    Completed,
    Rejected,
    #[default]
    Unknown,
}

impl<'de> Deserialize<'de> for BookingStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw).unwrap_or(Self::Unknown))
    }
}

impl BookingStatus {
    pub const KNOWN: [BookingStatus; 5] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Paid,
        BookingStatus::Completed,
        BookingStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Paid => "paid",
            BookingStatus::Completed => "completed",
            BookingStatus::Rejected => "rejected",
            BookingStatus::Unknown => "unknown",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::KNOWN
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(raw.trim()))
    }

    pub fn label(self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Paid => "Paid",
            BookingStatus::Completed => "Completed",
            BookingStatus::Rejected => "Rejected",
            BookingStatus::Unknown => "Unknown",
        }
    }

    pub fn next_statuses(self) -> &'static [BookingStatus] {
        match self {
            BookingStatus::Pending => &[BookingStatus::Confirmed, BookingStatus::Rejected],
            BookingStatus::Confirmed => &[BookingStatus::Paid, BookingStatus::Rejected],
            BookingStatus::Paid => &[BookingStatus::Completed],
            BookingStatus::Completed | BookingStatus::Rejected | BookingStatus::Unknown => &[],
        }
    }

    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        self.next_statuses().contains(&next)
    }

    pub fn is_terminal(self) -> bool {
        self.next_statuses().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub service_id: String,
    #[serde(default)]
    pub service_name: Option<String>,
    pub client_name: String,
    #[serde(default)]
    pub client_email: String,
    #[serde(default)]
    pub client_phone: String,
    pub booking_date: NaiveDate,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBooking {
    pub service_id: String,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub booking_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingQuery {
    pub status: Option<BookingStatus>,
    pub service_id: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl BookingQuery {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(service_id) = self.service_id.as_deref() {
            if !service_id.trim().is_empty() {
                params.push(("service_id", service_id.trim().to_string()));
            }
        }
        params.extend(DateRange::new(self.from, self.to).to_params());
        params
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookingStatus {
    pub status: BookingStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceContent {
    pub id: String,
    pub service_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub media_url: String,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Document,
}

impl ServiceContent {
    pub fn media_kind(&self) -> MediaKind {
        let mime = self.media_type.as_deref().unwrap_or_default();
        if mime.starts_with("image/") {
            MediaKind::Image
        } else if mime.starts_with("video/") {
            MediaKind::Video
        } else {
            MediaKind::Document
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentUpload {
    pub service_id: String,
    pub title: String,
    pub description: Option<String>,
    pub file: UploadFile,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardCounts {
    #[serde(default)]
    pub services: u64,
    #[serde(default)]
    pub members: u64,
    #[serde(default)]
    pub bookings: u64,
    #[serde(default)]
    pub pending_bookings: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmountSummary {
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub paid_amount: f64,
    #[serde(default)]
    pub pending_amount: f64,
    #[serde(default)]
    pub currency: Option<String>,
}

/// `{ date: { status: { service_id: count } } }` as returned by `/bookings/counts`.
pub type BookingCounts = BTreeMap<String, BTreeMap<String, BTreeMap<String, u64>>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn is_valid(&self) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= to,
            _ => true,
        }
    }

    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(from) = self.from {
            params.push(("from", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to {
            params.push(("to", to.format("%Y-%m-%d").to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNAUTHORIZED")
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }

    /// Builds an error from a non-2xx response body. Accepts `error` or
    /// `message` for the text and falls back to the status code.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: Option<Value> = serde_json::from_str(body).ok();
        let text = parsed.as_ref().and_then(|value| {
            value
                .get("error")
                .or_else(|| value.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
        });
        let code = parsed
            .as_ref()
            .and_then(|value| value.get("code"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| default_code_for_status(status).to_string());
        let details = parsed.as_ref().and_then(|value| value.get("details")).cloned();
        Self {
            error: text.unwrap_or_else(|| format!("Request failed with status {}", status)),
            code,
            details,
        }
    }
}

fn default_code_for_status(status: u16) -> &'static str {
    match status {
        400 | 422 => "VALIDATION_ERROR",
        401 => "UNAUTHORIZED",
        404 => "NOT_FOUND",
        _ => "REQUEST_FAILED",
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use leptos::IntoView;
    use serde_json::json;

    #[test]
    fn api_error_helpers_set_expected_codes() {
        assert_eq!(ApiError::validation("bad").code, "VALIDATION_ERROR");
        assert_eq!(ApiError::unknown("x").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("x").code, "REQUEST_FAILED");
        assert!(ApiError::unauthorized("x").is_unauthorized());
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");
        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn api_error_can_be_converted_to_view() {
        let _: View = ApiError::request_failed("request failed").into_view();
    }

    #[test]
    fn api_error_from_response_reads_error_or_message() {
        let err = ApiError::from_response(
            422,
            r#"{"error":"Email taken","code":"DUPLICATE","details":{"errors":["email"]}}"#,
        );
        assert_eq!(err.error, "Email taken");
        assert_eq!(err.code, "DUPLICATE");
        assert!(err.details.is_some());

        let err = ApiError::from_response(404, r#"{"message":"Service not found"}"#);
        assert_eq!(err.error, "Service not found");
        assert_eq!(err.code, "NOT_FOUND");

        let err = ApiError::from_response(502, "<html>bad gateway</html>");
        assert_eq!(err.error, "Request failed with status 502");
        assert_eq!(err.code, "REQUEST_FAILED");
    }

    #[test]
    fn member_role_accepts_aliases_and_defaults_to_regular() {
        let member: Member = serde_json::from_value(json!({
            "id": "m2",
            "name": "Hafiz",
            "email": "hafiz@espoint.test",
            "role": "user"
        }))
        .unwrap();
        assert_eq!(member.role, MemberRole::Regular);

        let member: Member = serde_json::from_value(json!({
            "id": "m3",
            "name": "Siti",
            "email": "siti@espoint.test"
        }))
        .unwrap();
        assert_eq!(member.role, MemberRole::Regular);
        assert!(!member.role.is_admin());
        assert_eq!(MemberRole::parse(" ADMIN "), Some(MemberRole::Admin));
        assert_eq!(MemberRole::parse("owner"), None);
    }

    #[test]
    fn service_defaults_fill_missing_fields() {
        let service: Service = serde_json::from_value(json!({
            "id": "svc-1",
            "name": "Recording Studio"
        }))
        .unwrap();
        assert!(service.is_active);
        assert_eq!(service.price, 0.0);
        assert!(service.capacity.is_none());
    }

    #[test]
    fn booking_status_workflow_allows_only_forward_transitions() {
        use BookingStatus::*;
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Rejected));
        assert!(!Pending.can_transition_to(Paid));
        assert!(Confirmed.can_transition_to(Paid));
        assert!(Confirmed.can_transition_to(Rejected));
        assert!(Paid.can_transition_to(Completed));
        assert!(!Paid.can_transition_to(Rejected));
        assert!(Completed.is_terminal());
        assert!(Rejected.is_terminal());
        assert!(Unknown.next_statuses().is_empty());
    }

    #[test]
    fn booking_status_tolerates_unknown_values() {
        let booking: Booking = serde_json::from_value(json!({
            "id": "b1",
            "service_id": "svc-1",
            "client_name": "Lee",
            "booking_date": "2026-02-01",
            "status": "archived"
        }))
        .unwrap();
        assert_eq!(booking.status, BookingStatus::Unknown);
        assert_eq!(BookingStatus::parse("PAID"), Some(BookingStatus::Paid));
        assert_eq!(BookingStatus::parse("unknown"), None);
    }

    #[test]
    fn booking_status_decoding_matches_parse() {
        let booking: Booking = serde_json::from_value(json!({
            "id": "b2",
            "service_id": "svc-1",
            "client_name": "Lee",
            "booking_date": "2026-02-01",
            "status": "Confirmed"
        }))
        .unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(Some(booking.status), BookingStatus::parse("Confirmed"));
        assert_eq!(
            booking.status.next_statuses(),
            &[BookingStatus::Paid, BookingStatus::Rejected]
        );
        assert_eq!(
            serde_json::to_value(booking.status).unwrap(),
            json!("confirmed")
        );
    }

    #[test]
    fn booking_without_status_offers_no_transitions() {
        let booking: Booking = serde_json::from_value(json!({
            "id": "b3",
            "service_id": "svc-1",
            "client_name": "Lee",
            "booking_date": "2026-02-01"
        }))
        .unwrap();
        assert_eq!(booking.status, BookingStatus::Unknown);
        assert!(booking.status.next_statuses().is_empty());
    }

    #[test]
    fn booking_query_omits_empty_filters() {
        let query = BookingQuery {
            status: Some(BookingStatus::Confirmed),
            service_id: Some("  ".into()),
            from: NaiveDate::from_ymd_opt(2026, 1, 1),
            to: None,
        };
        assert_eq!(
            query.to_params(),
            vec![
                ("status", "confirmed".to_string()),
                ("from", "2026-01-01".to_string())
            ]
        );
        assert!(BookingQuery::default().to_params().is_empty());
    }

    #[test]
    fn date_range_validity() {
        let jan1 = NaiveDate::from_ymd_opt(2026, 1, 1);
        let jan31 = NaiveDate::from_ymd_opt(2026, 1, 31);
        assert!(DateRange::new(jan1, jan31).is_valid());
        assert!(!DateRange::new(jan31, jan1).is_valid());
        assert!(DateRange::new(None, jan1).is_valid());
    }

    #[test]
    fn content_media_kind_follows_mime_type() {
        let mut content = ServiceContent {
            id: "c1".into(),
            service_id: "svc-1".into(),
            title: "Gallery".into(),
            description: None,
            media_url: "https://cdn.espoint.test/a.png".into(),
            media_type: Some("image/png".into()),
            created_at: None,
        };
        assert_eq!(content.media_kind(), MediaKind::Image);
        content.media_type = Some("video/mp4".into());
        assert_eq!(content.media_kind(), MediaKind::Video);
        content.media_type = None;
        assert_eq!(content.media_kind(), MediaKind::Document);
    }
}
