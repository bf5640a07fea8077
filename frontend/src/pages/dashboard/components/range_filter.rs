use crate::{
    api::{ApiError, BookingStatus},
    components::error::InlineErrorMessage,
};
use leptos::*;

#[component]
pub fn RangeFilter(
    from_input: RwSignal<String>,
    to_input: RwSignal<String>,
    status_filter: RwSignal<Option<BookingStatus>>,
    error: RwSignal<Option<ApiError>>,
    on_apply: Callback<()>,
) -> impl IntoView {
    let status_value = move || {
        status_filter
            .get()
            .map(|s| s.as_str().to_string())
            .unwrap_or_default()
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 space-y-3">
            <div class="flex flex-wrap items-end gap-4">
                <label class="text-sm text-fg-muted">
                    "From"
                    <input
                        type="date"
                        class="mt-1 block rounded-md border border-border bg-surface px-3 py-2 text-fg"
                        prop:value=from_input
                        on:input=move |ev| from_input.set(event_target_value(&ev))
                    />
                </label>
                <label class="text-sm text-fg-muted">
                    "To"
                    <input
                        type="date"
                        class="mt-1 block rounded-md border border-border bg-surface px-3 py-2 text-fg"
                        prop:value=to_input
                        on:input=move |ev| to_input.set(event_target_value(&ev))
                    />
                </label>
                <button
                    type="button"
                    class="rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                    on:click=move |_| on_apply.call(())
                >
                    "Apply"
                </button>
                <label class="text-sm text-fg-muted">
                    "Booking status"
                    <select
                        class="mt-1 block rounded-md border border-border bg-surface px-3 py-2 text-fg"
                        prop:value=status_value
                        on:change=move |ev| status_filter.set(BookingStatus::parse(&event_target_value(&ev)))
                    >
                        <option value="">"All statuses"</option>
                        {BookingStatus::KNOWN
                            .into_iter()
                            .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
            </div>
            <InlineErrorMessage error=error />
        </div>
    }
}
