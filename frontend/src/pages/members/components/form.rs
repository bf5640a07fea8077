use crate::{
    api::{ApiError, MemberRole},
    components::error::InlineErrorMessage,
    pages::members::utils::{MemberFormState, MIN_PASSWORD_LEN},
};
use leptos::{ev, *};

#[component]
pub fn MemberForm(
    form: RwSignal<MemberFormState>,
    error: RwSignal<Option<ApiError>>,
    #[prop(into)] is_edit: Signal<bool>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };
    let password_hint = move || {
        if is_edit.get() {
            format!("Leave blank to keep the current password. Minimum {MIN_PASSWORD_LEN} characters.")
        } else {
            format!("Minimum {MIN_PASSWORD_LEN} characters.")
        }
    };

    view! {
        <form class="grid grid-cols-1 md:grid-cols-2 gap-4" on:submit=handle_submit>
            <div>
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
            <div>
                <label class="block text-sm font-medium text-fg">"Email"</label>
                <input
                    type="email"
                    class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface"
                    prop:value=move || form.get().email
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|state| state.email = value);
                    }
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-fg">"Phone"</label>
                <input
                    type="tel"
                    class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface"
                    prop:value=move || form.get().phone
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|state| state.phone = value);
                    }
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-fg">"Role"</label>
                <select
                    class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface"
                    prop:value=move || form.get().role.as_str()
                    on:change=move |ev| {
                        let role = MemberRole::parse(&event_target_value(&ev)).unwrap_or_default();
                        form.update(|state| state.role = role);
                    }
                >
                    {MemberRole::ALL
                        .into_iter()
                        .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="md:col-span-2">
                <label class="block text-sm font-medium text-fg">"Password"</label>
                <input
                    type="password"
                    autocomplete="new-password"
                    class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface"
                    prop:value=move || form.get().password
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|state| state.password = value);
                    }
                />
                <p class="mt-1 text-xs text-fg-muted">{password_hint}</p>
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
                    {move || if pending.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </form>
    }
}
