use crate::{api::ApiError, components::error::InlineErrorMessage, pages::login::utils::LoginFormState};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    form: LoginFormState,
    error: RwSignal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Sign in to ESPOINT"
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">"Service booking administration"</p>
                </div>
                <form class="mt-8 space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <div>
                            <label for="email" class="sr-only">"Email"</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                autocomplete="username"
                                required
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-border bg-surface-elevated text-fg rounded-t-md focus:outline-none focus:z-10 sm:text-sm"
                                placeholder="Email"
                                prop:value=form.email
                                on:input=move |ev| form.email.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="password" class="sr-only">"Password"</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                autocomplete="current-password"
                                required
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-border bg-surface-elevated text-fg rounded-b-md focus:outline-none focus:z-10 sm:text-sm"
                                placeholder="Password"
                                prop:value=form.password
                                on:input=move |ev| form.password.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <InlineErrorMessage error=error />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
