use crate::{
    api::ApiError,
    components::error::InlineErrorMessage,
    pages::contents::utils::{format_file_size, UploadFormState},
    utils::file::FileMeta,
};
use leptos::{ev, *};
use wasm_bindgen::JsCast;

fn picked_file(ev: &ev::Event) -> Option<web_sys::File> {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

#[component]
pub fn UploadForm(
    form: RwSignal<UploadFormState>,
    file_meta: RwSignal<Option<FileMeta>>,
    error: RwSignal<Option<ApiError>>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] pending: Signal<bool>,
    on_file: Callback<Option<web_sys::File>>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <form class="bg-surface-elevated shadow rounded-lg p-6 grid grid-cols-1 md:grid-cols-2 gap-4" on:submit=handle_submit>
            <h2 class="md:col-span-2 text-lg font-medium text-fg">"Upload content"</h2>
            <div>
                <label class="block text-sm font-medium text-fg">"Title"</label>
                <input
                    class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface"
                    prop:value=move || form.get().title
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|state| state.title = value);
                    }
                />
            </div>
            <div>
                <label class="block text-sm font-medium text-fg">"File"</label>
                <input
                    type="file"
                    accept="image/*,video/*,application/pdf"
                    class="mt-1 w-full text-sm"
                    on:change=move |ev| on_file.call(picked_file(&ev))
                />
                <p class="mt-1 text-xs text-fg-muted">
                    {move || match file_meta.get() {
                        Some(meta) => format!("{} ({})", meta.name, format_file_size(meta.size)),
                        None => "Images, videos or PDF up to 10 MB".to_string(),
                    }}
                </p>
            </div>
            <div class="md:col-span-2">
                <label class="block text-sm font-medium text-fg">"Description"</label>
                <textarea
                    rows="2"
                    class="mt-1 w-full border border-border rounded px-2 py-1 bg-surface"
                    prop:value=move || form.get().description
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|state| state.description = value);
                    }
                ></textarea>
            </div>
            <div class="md:col-span-2">
                <InlineErrorMessage error=error />
            </div>
            <div class="md:col-span-2 flex justify-end">
                <button
                    type="submit"
                    disabled=move || disabled.get() || pending.get()
                    class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                >
                    {move || if pending.get() { "Uploading..." } else { "Upload" }}
                </button>
            </div>
        </form>
    }
}
