use crate::{
    api::{ApiError, Service},
    components::error::InlineErrorMessage,
    pages::bookings::utils::BookingFormState,
};
use leptos::{ev, *};

fn bind(
    form: RwSignal<BookingFormState>,
    assign: fn(&mut BookingFormState, String),
) -> impl Fn(ev::Event) + 'static {
    move |ev| {
        let value = event_target_value(&ev);
        form.update(|state| assign(state, value));
    }
}

#[component]
pub fn CreateBookingForm(
    form: RwSignal<BookingFormState>,
    error: RwSignal<Option<ApiError>>,
    #[prop(into)] services: Signal<Vec<Service>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };
    let active_services = Signal::derive(move || {
        services
            .get()
            .into_iter()
            .filter(|service| service.is_active)
            .collect::<Vec<_>>()
    });

    view! {
        <form class="grid grid-cols-1 md:grid-cols-2 gap-4" on:submit=handle_submit>
            <div class="md:col-span-2">
                <label class="block text-sm font-medium text-fg">"Service"</label>
                <select
                    class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface"
                    prop:value=move || form.get().service_id
                    on:change=bind(form, |s, v| s.service_id = v)
                >
                    <option value="">"Select a service"</option>
                    {move || active_services
                        .get()
                        .into_iter()
                        .map(|service| view! { <option value=service.id>{service.name}</option> })
                        .collect_view()}
                </select>
            </div>
            <div>
                <label class="block text-sm font-medium text-fg">"Client name"</label>
                <input
                    class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface"
                    prop:value=move || form.get().client_name
                    on:input=bind(form, |s, v| s.client_name = v)
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-fg">"Client email"</label>
                <input
                    type="email"
                    class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface"
                    prop:value=move || form.get().client_email
                    on:input=bind(form, |s, v| s.client_email = v)
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-fg">"Client phone"</label>
                <input
                    type="tel"
                    class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface"
                    prop:value=move || form.get().client_phone
                    on:input=bind(form, |s, v| s.client_phone = v)
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-fg">"Date"</label>
                <input
                    type="date"
                    class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface"
                    prop:value=move || form.get().booking_date
                    on:input=bind(form, |s, v| s.booking_date = v)
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-fg">"Start time"</label>
                <input
                    type="time"
                    class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface"
                    prop:value=move || form.get().start_time
                    on:input=bind(form, |s, v| s.start_time = v)
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-fg">"End time"</label>
                <input
                    type="time"
                    class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface"
                    prop:value=move || form.get().end_time
                    on:input=bind(form, |s, v| s.end_time = v)
                />
            </div>
            <div class="md:col-span-2">
                <label class="block text-sm font-medium text-fg">"Notes"</label>
                <textarea
                    rows="2"
                    class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface"
                    prop:value=move || form.get().notes
                    on:input=bind(form, |s, v| s.notes = v)
                ></textarea>
            </div>
            <div class="md:col-span-2">
                <InlineErrorMessage error=error />
            </div>
            <div class="md:col-span-2 flex justify-end gap-2">
                <button
                    type="button"
                    class="px-4 py-2 rounded bg-surface-muted text-fg"
                    on:click=move |_| on_cancel.call(())
                >
                    "Cancel"
                </button>
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                >
                    {move || if pending.get() { "Creating..." } else { "Create booking" }}
                </button>
            </div>
        </form>
    }
}
