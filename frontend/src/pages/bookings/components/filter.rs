use crate::{
    api::{BookingStatus, Service},
    pages::bookings::utils::BookingFilter,
};
use leptos::*;

#[component]
pub fn BookingsFilter(
    filter: RwSignal<BookingFilter>,
    #[prop(into)] services: Signal<Vec<Service>>,
    on_change: Callback<BookingFilter>,
) -> impl IntoView {
    let update = move |apply: &dyn Fn(&mut BookingFilter)| {
        let mut next = filter.get_untracked();
        apply(&mut next);
        on_change.call(next);
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 flex flex-col gap-3 md:flex-row md:items-end">
            <label class="text-sm text-fg-muted">
                "Status"
                <select
                    class="mt-1 block border border-border rounded px-2 py-1 bg-surface"
                    prop:value=move || filter.get().status.map(|s| s.as_str()).unwrap_or_default()
                    on:change=move |ev| {
                        let status = BookingStatus::parse(&event_target_value(&ev));
                        update(&|f| f.status = status);
                    }
                >
                    <option value="">"All"</option>
                    {BookingStatus::KNOWN
                        .into_iter()
                        .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class="text-sm text-fg-muted">
                "Service"
                <select
                    class="mt-1 block border border-border rounded px-2 py-1 bg-surface"
                    prop:value=move || filter.get().service_id.unwrap_or_default()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let service_id = (!value.is_empty()).then_some(value);
                        update(&|f| f.service_id = service_id.clone());
                    }
                >
                    <option value="">"All services"</option>
                    {move || services
                        .get()
                        .into_iter()
                        .map(|service| view! { <option value=service.id>{service.name}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class="text-sm text-fg-muted flex-1">
                "Search"
                <input
                    type="search"
                    class="mt-1 block w-full border border-border rounded px-2 py-1 bg-surface"
                    placeholder="Client name, email or phone"
                    prop:value=move || filter.get().search
                    on:input=move |ev| {
                        let search = event_target_value(&ev);
                        update(&|f| f.search = search.clone());
                    }
                />
            </label>
            <button
                type="button"
                class="text-sm text-fg-muted underline"
                on:click=move |_| on_change.call(BookingFilter::default())
            >
                "Clear"
            </button>
        </div>
    }
}
