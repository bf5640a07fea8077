use crate::{
    api::{AmountSummary, ApiError, DashboardCounts, DateRange},
    components::{error::InlineErrorMessage, layout::LoadingSpinner},
    utils::format::format_amount,
};
use leptos::*;

#[component]
pub fn CountCards(counts: Resource<(), Result<DashboardCounts, ApiError>>) -> impl IntoView {
    view! {
        <div>
            {move || match counts.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => view! { <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) /> }.into_view(),
                Some(Ok(data)) => view! {
                    <div class="grid grid-cols-2 gap-4 lg:grid-cols-4">
                        <Metric label="Services" value=data.services.to_string() />
                        <Metric label="Members" value=data.members.to_string() />
                        <Metric label="Bookings" value=data.bookings.to_string() />
                        <Metric label="Pending bookings" value=data.pending_bookings.to_string() />
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

#[component]
pub fn AmountCards(amounts: Resource<DateRange, Result<AmountSummary, ApiError>>) -> impl IntoView {
    view! {
        <div>
            {move || match amounts.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => view! { <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) /> }.into_view(),
                Some(Ok(data)) => {
                    let currency = data.currency.clone();
                    let fmt = move |value: f64| format_amount(value, currency.as_deref());
                    view! {
                        <div class="grid grid-cols-1 gap-4 lg:grid-cols-3">
                            <Metric label="Total amount" value=fmt(data.total_amount) />
                            <Metric label="Paid" value=fmt(data.paid_amount) />
                            <Metric label="Pending" value=fmt(data.pending_amount) />
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

#[component]
pub fn Metric(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="p-6 rounded-lg bg-surface-elevated border border-border shadow-sm">
            <p class="text-xs font-bold uppercase tracking-widest text-fg-muted">{label}</p>
            <p class="mt-3 text-3xl font-extrabold text-fg">{value}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn metric_renders_label_and_value() {
        let html = render_to_string(move || view! { <Metric label="Bookings" value="42" /> });
        assert!(html.contains("Bookings"));
        assert!(html.contains("42"));
    }
}
