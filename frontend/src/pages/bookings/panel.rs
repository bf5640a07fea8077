use crate::{
    api::{Booking, BookingStatus},
    components::{
        confirm_dialog::ConfirmDialog,
        dialog::FormDialog,
        layout::{Layout, MessageBanner},
    },
};
use leptos::*;

use super::{
    components::{create_form::CreateBookingForm, filter::BookingsFilter, list::BookingList},
    utils::BookingFilter,
    view_model::use_bookings_view_model,
};

#[component]
pub fn BookingsPage() -> impl IntoView {
    let vm = use_bookings_view_model();

    let services = Signal::derive(move || {
        vm.services_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let reject_message = Signal::derive(move || {
        vm.reject_target
            .get()
            .map(|booking| {
                format!(
                    "Reject the booking for {} on {}? This cannot be undone.",
                    booking.client_name,
                    booking.booking_date.format("%Y-%m-%d")
                )
            })
            .unwrap_or_default()
    });
    let status_pending = vm.status_action.pending();

    let on_filter = Callback::new(move |next: BookingFilter| vm.update_filter(|filter| *filter = next));
    let on_transition = Callback::new(move |(booking, next): (Booking, BookingStatus)| {
        vm.request_transition(booking, next)
    });

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-2xl font-bold text-fg">"Bookings"</h1>
                        <p class="mt-1 text-sm text-fg-muted">"Review requests and move them through the workflow."</p>
                    </div>
                    <button
                        type="button"
                        class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text"
                        on:click=move |_| vm.open_create()
                    >
                        "New booking"
                    </button>
                </div>
                <MessageBanner messages=vm.messages />
                <BookingsFilter filter=vm.filter services=services on_change=on_filter />
                <BookingList
                    bookings_resource=vm.bookings_resource
                    visible=vm.visible
                    services=services
                    busy=status_pending
                    on_page=Callback::new(move |page: usize| vm.page.set(page))
                    on_transition=on_transition
                />
            </div>
            <FormDialog
                is_open=vm.dialog_open
                title="New booking"
                on_close=Callback::new(move |_| vm.close_dialog())
            >
                <CreateBookingForm
                    form=vm.form
                    error=vm.form_error
                    services=services
                    pending=vm.create_action.pending()
                    on_submit=Callback::new(move |_| vm.submit())
                    on_cancel=Callback::new(move |_| vm.close_dialog())
                />
            </FormDialog>
            <ConfirmDialog
                is_open=Signal::derive(move || vm.reject_target.get().is_some())
                title="Reject booking"
                message=reject_message
                confirm_label="Reject"
                destructive=true
                confirm_disabled=status_pending
                on_confirm=Callback::new(move |_| vm.confirm_reject())
                on_cancel=Callback::new(move |_| vm.reject_target.set(None))
            />
        </Layout>
    }
}
