use crate::api::{Booking, BookingQuery, BookingStatus, CreateBooking};
use crate::utils::format::{parse_date_input, parse_time_input};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFilter {
    pub status: Option<BookingStatus>,
    pub service_id: Option<String>,
    pub search: String,
}

impl BookingFilter {
    pub fn to_query(&self) -> BookingQuery {
        BookingQuery {
            status: self.status,
            service_id: self.service_id.clone(),
            ..BookingQuery::default()
        }
    }

    pub fn matches(&self, booking: &Booking) -> bool {
        if let Some(status) = self.status {
            if booking.status != status {
                return false;
            }
        }
        if let Some(service_id) = self.service_id.as_deref() {
            if booking.service_id != service_id {
                return false;
            }
        }
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || [
                booking.client_name.as_str(),
                booking.client_email.as_str(),
                booking.client_phone.as_str(),
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

pub fn filter_bookings(bookings: &[Booking], filter: &BookingFilter) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|booking| filter.matches(booking))
        .cloned()
        .collect()
}

pub fn status_badge_class(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "bg-status-warning-bg text-status-warning-text",
        BookingStatus::Confirmed => "bg-status-info-bg text-status-info-text",
        BookingStatus::Paid | BookingStatus::Completed => {
            "bg-status-success-bg text-status-success-text"
        }
        BookingStatus::Rejected => "bg-status-error-bg text-status-error-text",
        BookingStatus::Unknown => "bg-surface-muted text-fg-muted",
    }
}

pub fn transition_label(next: BookingStatus) -> &'static str {
    match next {
        BookingStatus::Confirmed => "Confirm",
        BookingStatus::Paid => "Mark paid",
        BookingStatus::Completed => "Complete",
        BookingStatus::Rejected => "Reject",
        BookingStatus::Pending | BookingStatus::Unknown => "Update",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFormState {
    pub service_id: String,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub booking_date: String,
    pub start_time: String,
    pub end_time: String,
    pub notes: String,
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl BookingFormState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_request(&self) -> Result<CreateBooking, String> {
        let service_id = self.service_id.trim();
        if service_id.is_empty() {
            return Err("Select a service".into());
        }
        let client_name = self.client_name.trim();
        if client_name.is_empty() {
            return Err("Client name is required".into());
        }
        let client_email = self.client_email.trim();
        if client_email.is_empty() {
            return Err("Client email is required".into());
        }
        if !client_email.contains('@') {
            return Err("Enter a valid client email address".into());
        }
        let client_phone = self.client_phone.trim();
        if client_phone.is_empty() {
            return Err("Client phone is required".into());
        }
        if self.booking_date.trim().is_empty() {
            return Err("Booking date is required".into());
        }
        let booking_date =
            parse_date_input(&self.booking_date).ok_or("Booking date is not a valid date")?;

        let start_time = optional(&self.start_time);
        let end_time = optional(&self.end_time);
        let start = match start_time.as_deref() {
            Some(raw) => Some(parse_time_input(raw).ok_or("Start time must be HH:MM")?),
            None => None,
        };
        let end = match end_time.as_deref() {
            Some(raw) => Some(parse_time_input(raw).ok_or("End time must be HH:MM")?),
            None => None,
        };
        if let (Some(start), Some(end)) = (start, end) {
            if end <= start {
                return Err("End time must be after the start time".into());
            }
        }

        Ok(CreateBooking {
            service_id: service_id.to_string(),
            client_name: client_name.to_string(),
            client_email: client_email.to_string(),
            client_phone: client_phone.to_string(),
            booking_date,
            start_time,
            end_time,
            notes: optional(&self.notes),
        })
    }
}
