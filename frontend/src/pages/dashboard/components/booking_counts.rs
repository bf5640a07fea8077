use crate::{
    api::{ApiError, BookingCounts, BookingStatus, DateRange, Service},
    components::{empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner},
    pages::dashboard::utils::{service_rows, totals_by_status, ServiceCountRow},
};
use leptos::*;

fn rows_view(rows: Vec<ServiceCountRow>) -> View {
    if rows.is_empty() {
        return view! { <EmptyState title="No services yet" /> }.into_view();
    }
    view! {
        <table class="min-w-full divide-y divide-border text-sm">
            <thead>
                <tr>
                    <th class="px-4 py-2 text-left font-medium text-fg-muted">"Service"</th>
                    <th class="px-4 py-2 text-right font-medium text-fg-muted">"Bookings"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                {rows
                    .into_iter()
                    .map(|row| view! {
                        <tr>
                            <td class="px-4 py-2 text-fg">{row.name}</td>
                            <td class="px-4 py-2 text-right text-fg">{row.count}</td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_view()
}

#[component]
pub fn ServiceCountsTable(
    counts: Resource<DateRange, Result<BookingCounts, ApiError>>,
    services: Resource<(), Result<Vec<Service>, ApiError>>,
    #[prop(into)] status: Signal<Option<BookingStatus>>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-base font-semibold text-fg">"Bookings per service"</h3>
            {move || match (counts.get(), services.get()) {
                (Some(Err(err)), _) | (_, Some(Err(err))) => {
                    view! { <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) /> }.into_view()
                }
                (Some(Ok(counts)), Some(Ok(services))) => {
                    rows_view(service_rows(&services, &counts, status.get()))
                }
                _ => view! { <LoadingSpinner /> }.into_view(),
            }}
        </div>
    }
}

#[component]
pub fn StatusTotals(counts: Resource<DateRange, Result<BookingCounts, ApiError>>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-base font-semibold text-fg">"Bookings per status"</h3>
            {move || match counts.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => view! { <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) /> }.into_view(),
                Some(Ok(counts)) => view! {
                    <ul class="grid grid-cols-2 gap-3 lg:grid-cols-3">
                        {totals_by_status(&counts)
                            .into_iter()
                            .map(|(status, count)| view! {
                                <li class="flex justify-between rounded border border-border px-3 py-2">
                                    <span class="text-fg-muted">{status.label()}</span>
                                    <span class="font-semibold text-fg">{count}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                }.into_view(),
            }}
        </div>
    }
}
