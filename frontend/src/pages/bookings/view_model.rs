use super::{
    repository::BookingsRepository,
    utils::{filter_bookings, BookingFilter, BookingFormState},
};
use crate::api::{ApiClient, ApiError, Booking, BookingQuery, BookingStatus, CreateBooking, Service};
use crate::utils::{
    message::MessageState,
    pagination::{paginate, Page, DEFAULT_PER_PAGE},
};
use leptos::*;
use std::rc::Rc;

pub type StatusChange = (Booking, BookingStatus);

#[derive(Clone, Copy)]
pub struct BookingsViewModel {
    pub filter: RwSignal<BookingFilter>,
    pub page: RwSignal<usize>,
    pub reload: RwSignal<u32>,
    pub bookings_resource: Resource<(BookingQuery, u32), Result<Vec<Booking>, ApiError>>,
    pub services_resource: Resource<(), Result<Vec<Service>, ApiError>>,
    pub visible: Memo<Page<Booking>>,
    pub messages: RwSignal<MessageState>,
    pub form: RwSignal<BookingFormState>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub dialog_open: RwSignal<bool>,
    pub reject_target: RwSignal<Option<Booking>>,
    pub create_action: Action<CreateBooking, Result<Booking, ApiError>>,
    pub status_action: Action<StatusChange, Result<Booking, ApiError>>,
}

impl BookingsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = BookingsRepository::new_with_client(Rc::new(api));

        let filter = create_rw_signal(BookingFilter::default());
        let page = create_rw_signal(1usize);
        let reload = create_rw_signal(0u32);
        let messages = create_rw_signal(MessageState::default());
        let form = create_rw_signal(BookingFormState::default());
        let form_error = create_rw_signal(None::<ApiError>);
        let dialog_open = create_rw_signal(false);
        let reject_target = create_rw_signal(None::<Booking>);

        let server_query = create_memo(move |_| filter.with(BookingFilter::to_query));

        let repo = repository.clone();
        let bookings_resource = create_resource(
            move || (server_query.get(), reload.get()),
            move |(query, _)| {
                let repo = repo.clone();
                async move { repo.fetch_bookings(query).await }
            },
        );

        let repo = repository.clone();
        let services_resource = create_resource(
            || (),
            move |_| {
                let repo = repo.clone();
                async move { repo.fetch_services().await }
            },
        );

        let visible = create_memo(move |_| {
            let bookings = bookings_resource
                .get()
                .and_then(|result| result.ok())
                .unwrap_or_default();
            let filtered = filter.with(|filter| filter_bookings(&bookings, filter));
            paginate(&filtered, page.get(), DEFAULT_PER_PAGE)
        });

        let repo = repository.clone();
        let create_booking_action = create_action(move |payload: &CreateBooking| {
            let repo = repo.clone();
            let payload = payload.clone();
            async move { repo.create_booking(payload).await }
        });

        let repo = repository;
        let status_action = create_action(move |(booking, next): &StatusChange| {
            let repo = repo.clone();
            let booking = booking.clone();
            let next = *next;
            async move { repo.update_status(booking, next).await }
        });

        let bump = move || reload.update(|value| *value = value.wrapping_add(1));

        create_effect(move |_| {
            if let Some(result) = create_booking_action.value().get() {
                match result {
                    Ok(booking) => {
                        messages.update(|state| {
                            state.set_success(format!("Booking for {} created.", booking.client_name))
                        });
                        dialog_open.set(false);
                        form.update(BookingFormState::reset);
                        bump();
                    }
                    Err(err) => form_error.set(Some(err)),
                }
            }
        });

        create_effect(move |_| {
            if let Some(result) = status_action.value().get() {
                match result {
                    Ok(booking) => {
                        messages.update(|state| {
                            state.set_success(format!(
                                "Booking for {} is now {}.",
                                booking.client_name,
                                booking.status.label().to_lowercase()
                            ))
                        });
                        bump();
                    }
                    Err(err) => messages.update(|state| state.set_error(err.error)),
                }
            }
        });

        Self {
            filter,
            page,
            reload,
            bookings_resource,
            services_resource,
            visible,
            messages,
            form,
            form_error,
            dialog_open,
            reject_target,
            create_action: create_booking_action,
            status_action,
        }
    }

    /// Any filter change returns to the first page.
    pub fn update_filter(&self, apply: impl FnOnce(&mut BookingFilter)) {
        self.filter.update(apply);
        self.page.set(1);
    }

    pub fn open_create(&self) {
        self.form.set(BookingFormState::default());
        self.form_error.set(None);
        self.dialog_open.set(true);
    }

    pub fn close_dialog(&self) {
        self.dialog_open.set(false);
        self.form_error.set(None);
    }

    pub fn submit(&self) {
        if self.create_action.pending().get_untracked() {
            return;
        }
        match self.form.get_untracked().to_request() {
            Ok(payload) => {
                self.form_error.set(None);
                self.create_action.dispatch(payload);
            }
            Err(msg) => self.form_error.set(Some(ApiError::validation(msg))),
        }
    }

    /// Rejections wait for confirmation; other transitions go straight out.
    pub fn request_transition(&self, booking: Booking, next: BookingStatus) {
        if !booking.status.can_transition_to(next) {
            self.messages.update(|state| {
                state.set_error(format!(
                    "A {} booking cannot be marked {}.",
                    booking.status.label().to_lowercase(),
                    next.label().to_lowercase()
                ))
            });
            return;
        }
        if next == BookingStatus::Rejected {
            self.reject_target.set(Some(booking));
            return;
        }
        self.messages.update(MessageState::clear);
        self.status_action.dispatch((booking, next));
    }

    pub fn confirm_reject(&self) {
        if let Some(booking) = self.reject_target.get_untracked() {
            self.messages.update(MessageState::clear);
            self.status_action.dispatch((booking, BookingStatus::Rejected));
        }
        self.reject_target.set(None);
    }
}

pub fn use_bookings_view_model() -> BookingsViewModel {
    BookingsViewModel::new()
}
