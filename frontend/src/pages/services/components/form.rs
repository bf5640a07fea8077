use crate::{
    api::ApiError, components::error::InlineErrorMessage,
    pages::services::utils::ServiceFormState,
};
use leptos::{ev, *};

#[component]
pub fn ServiceForm(
    form: RwSignal<ServiceFormState>,
    error: RwSignal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <form class="grid grid-cols-1 md:grid-cols-2 gap-4" on:submit=handle_submit>
            <div class="md:col-span-2">
                <label class="block text-sm font-medium text-fg">"Name"</label>
                <input
                    class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface"
                    prop:value=move || form.get().name
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|state| state.name = value);
                    }
                />
            </div>
            <div class="md:col-span-2">
                <label class="block text-sm font-medium text-fg">"Description"</label>
                <textarea
                    class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface"
                    rows="3"
                    prop:value=move || form.get().description
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|state| state.description = value);
                    }
                ></textarea>
            </div>
            <div>
                <label class="block text-sm font-medium text-fg">"Category"</label>
                <input
                    class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface"
                    prop:value=move || form.get().category
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|state| state.category = value);
                    }
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-fg">"Price"</label>
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface"
                    prop:value=move || form.get().price
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|state| state.price = value);
                    }
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-fg">"Capacity"</label>
                <input
                    type="number"
                    min="1"
                    class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface"
                    placeholder="Unlimited"
                    prop:value=move || form.get().capacity
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|state| state.capacity = value);
                    }
                />
            </div>
            <label class="flex items-center space-x-2 self-end">
                <input
                    type="checkbox"
                    class="h-4 w-4 rounded border-border"
                    prop:checked=move || form.get().is_active
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        form.update(|state| state.is_active = checked);
                    }
                />
                <span class="text-sm text-fg">"Active"</span>
            </label>
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
                    {move || if pending.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </form>
    }
}
