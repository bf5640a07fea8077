use super::{repository::DashboardRepository, utils::current_month_range};
use crate::api::{
    AmountSummary, ApiClient, ApiError, BookingCounts, BookingStatus, DashboardCounts, DateRange,
    Service,
};
use crate::utils::format::{format_date, parse_date_input};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub from_input: RwSignal<String>,
    pub to_input: RwSignal<String>,
    pub range: RwSignal<DateRange>,
    pub range_error: RwSignal<Option<ApiError>>,
    pub status_filter: RwSignal<Option<BookingStatus>>,
    pub counts_resource: Resource<(), Result<DashboardCounts, ApiError>>,
    pub amounts_resource: Resource<DateRange, Result<AmountSummary, ApiError>>,
    pub booking_counts_resource: Resource<DateRange, Result<BookingCounts, ApiError>>,
    pub services_resource: Resource<(), Result<Vec<Service>, ApiError>>,
}

/// Parses the from/to inputs. Blank means unbounded; an unparseable or
/// inverted range is a validation error.
pub fn parse_range(from: &str, to: &str) -> Result<DateRange, ApiError> {
    let parse = |raw: &str, label: &str| -> Result<Option<_>, ApiError> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        parse_date_input(raw)
            .map(Some)
            .ok_or_else(|| ApiError::validation(format!("{label} date is not a valid date")))
    };
    let range = DateRange::new(parse(from, "Start")?, parse(to, "End")?);
    if !range.is_valid() {
        return Err(ApiError::validation(
            "The start date must not be after the end date",
        ));
    }
    Ok(range)
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = DashboardRepository::new_with_client(Rc::new(api));

        let initial = current_month_range();
        let from_input = create_rw_signal(initial.from.map(format_date).unwrap_or_default());
        let to_input = create_rw_signal(initial.to.map(format_date).unwrap_or_default());
        let range = create_rw_signal(initial);
        let range_error = create_rw_signal(None::<ApiError>);
        let status_filter = create_rw_signal(None::<BookingStatus>);

        let repo = repository.clone();
        let counts_resource = create_resource(
            || (),
            move |_| {
                let repo = repo.clone();
                async move { repo.fetch_counts().await }
            },
        );

        let repo = repository.clone();
        let amounts_resource = create_resource(
            move || range.get(),
            move |range| {
                let repo = repo.clone();
                async move { repo.fetch_amounts(range).await }
            },
        );

        let repo = repository.clone();
        let booking_counts_resource = create_resource(
            move || range.get(),
            move |range| {
                let repo = repo.clone();
                async move { repo.fetch_booking_counts(range).await }
            },
        );

        let repo = repository;
        let services_resource = create_resource(
            || (),
            move |_| {
                let repo = repo.clone();
                async move { repo.fetch_services().await }
            },
        );

        Self {
            from_input,
            to_input,
            range,
            range_error,
            status_filter,
            counts_resource,
            amounts_resource,
            booking_counts_resource,
            services_resource,
        }
    }

    pub fn apply_range(&self) {
        match parse_range(&self.from_input.get_untracked(), &self.to_input.get_untracked()) {
            Ok(range) => {
                self.range_error.set(None);
                self.range.set(range);
            }
            Err(err) => self.range_error.set(Some(err)),
        }
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    DashboardViewModel::new()
}
