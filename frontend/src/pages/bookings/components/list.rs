use crate::{
    api::{ApiError, Booking, BookingQuery, BookingStatus, Service},
    components::{
        common::Pager, empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner,
    },
    pages::bookings::{components::status_badge::StatusBadge, utils::transition_label},
    utils::{
        format::{format_amount, format_date},
        pagination::Page,
    },
};
use leptos::*;

pub fn time_slot(booking: &Booking) -> String {
    match (booking.start_time.as_deref(), booking.end_time.as_deref()) {
        (Some(start), Some(end)) => format!("{start} - {end}"),
        (Some(start), None) => start.to_string(),
        _ => "-".into(),
    }
}

pub fn service_label(booking: &Booking, services: &[Service]) -> String {
    booking
        .service_name
        .clone()
        .or_else(|| {
            services
                .iter()
                .find(|service| service.id == booking.service_id)
                .map(|service| service.name.clone())
        })
        .unwrap_or_else(|| booking.service_id.clone())
}

#[component]
pub fn BookingList(
    bookings_resource: Resource<(BookingQuery, u32), Result<Vec<Booking>, ApiError>>,
    visible: Memo<Page<Booking>>,
    #[prop(into)] services: Signal<Vec<Service>>,
    #[prop(into)] busy: Signal<bool>,
    on_page: Callback<usize>,
    on_transition: Callback<(Booking, BookingStatus)>,
) -> impl IntoView {
    let fetch_error = Signal::derive(move || bookings_resource.get().and_then(|result| result.err()));
    let loading = bookings_resource.loading();
    let items = Signal::derive(move || visible.get().items);
    let page = Signal::derive(move || visible.get().page);
    let total_pages = Signal::derive(move || visible.get().total_pages);
    let total = Signal::derive(move || visible.get().total);

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <InlineErrorMessage error=fetch_error />
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            <Show when=move || !loading.get() && items.get().is_empty() && fetch_error.get().is_none()>
                <EmptyState title="No bookings match" description="Adjust the filters or create a booking." />
            </Show>
            <Show when=move || !items.get().is_empty()>
                <p class="text-xs text-fg-muted">{move || format!("{} bookings", total.get())}</p>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border text-sm">
                        <thead>
                            <tr>
                                <th class="px-4 py-2 text-left font-medium text-fg-muted">"Client"</th>
                                <th class="px-4 py-2 text-left font-medium text-fg-muted">"Service"</th>
                                <th class="px-4 py-2 text-left font-medium text-fg-muted">"Date"</th>
                                <th class="px-4 py-2 text-left font-medium text-fg-muted">"Time"</th>
                                <th class="px-4 py-2 text-right font-medium text-fg-muted">"Amount"</th>
                                <th class="px-4 py-2 text-left font-medium text-fg-muted">"Status"</th>
                                <th class="px-4 py-2"></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || items.get()
                                key=|booking| (booking.id.clone(), booking.status)
                                children=move |booking: Booking| {
                                    let service_name = service_label(&booking, &services.get_untracked());
                                    let actions = booking
                                        .status
                                        .next_statuses()
                                        .iter()
                                        .copied()
                                        .map(|next| {
                                            let target = booking.clone();
                                            let class = if next == BookingStatus::Rejected {
                                                "text-status-error-text hover:underline disabled:opacity-50"
                                            } else {
                                                "text-action-primary-bg hover:underline disabled:opacity-50"
                                            };
                                            view! {
                                                <button
                                                    type="button"
                                                    class=class
                                                    disabled=move || busy.get()
                                                    on:click=move |_| on_transition.call((target.clone(), next))
                                                >
                                                    {transition_label(next)}
                                                </button>
                                            }
                                        })
                                        .collect_view();
                                    view! {
                                        <tr>
                                            <td class="px-4 py-2">
                                                <p class="font-medium text-fg">{booking.client_name.clone()}</p>
                                                <p class="text-xs text-fg-muted">{booking.client_email.clone()}</p>
                                                <p class="text-xs text-fg-muted">{booking.client_phone.clone()}</p>
                                            </td>
                                            <td class="px-4 py-2 text-fg">{service_name}</td>
                                            <td class="px-4 py-2 text-fg">{format_date(booking.booking_date)}</td>
                                            <td class="px-4 py-2 text-fg-muted">{time_slot(&booking)}</td>
                                            <td class="px-4 py-2 text-right text-fg">
                                                {booking.amount.map(|a| format_amount(a, None)).unwrap_or_else(|| "-".into())}
                                            </td>
                                            <td class="px-4 py-2"><StatusBadge status=booking.status /></td>
                                            <td class="px-4 py-2 text-right space-x-2 whitespace-nowrap">{actions}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
                <Pager page=page total_pages=total_pages on_change=on_page />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::service;
    use chrono::NaiveDate;

    fn booking() -> Booking {
        Booking {
            id: "b-1".into(),
            service_id: "svc-1".into(),
            service_name: None,
            client_name: "Farah".into(),
            client_email: "farah@mail.test".into(),
            client_phone: "0123".into(),
            booking_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            start_time: Some("09:00".into()),
            end_time: Some("10:00".into()),
            status: BookingStatus::Pending,
            amount: None,
            notes: None,
            created_at: None,
        }
    }

    #[test]
    fn time_slot_formats_available_times() {
        let mut b = booking();
        assert_eq!(time_slot(&b), "09:00 - 10:00");
        b.end_time = None;
        assert_eq!(time_slot(&b), "09:00");
        b.start_time = None;
        assert_eq!(time_slot(&b), "-");
    }

    #[test]
    fn service_label_prefers_embedded_name_then_lookup() {
        let mut b = booking();
        let services = vec![service("svc-1", "Yoga")];
        assert_eq!(service_label(&b, &services), "Yoga");
        assert_eq!(service_label(&b, &[]), "svc-1");
        b.service_name = Some("Hot Yoga".into());
        assert_eq!(service_label(&b, &services), "Hot Yoga");
    }
}
