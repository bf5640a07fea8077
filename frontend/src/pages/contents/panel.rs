use crate::{
    api::ServiceContent,
    components::{
        confirm_dialog::ConfirmDialog,
        layout::{Layout, MessageBanner},
    },
};
use leptos::*;

use super::{
    components::{list::ContentList, upload_form::UploadForm},
    view_model::use_contents_view_model,
};

#[component]
pub fn ContentsPage() -> impl IntoView {
    let vm = use_contents_view_model();

    let services = Signal::derive(move || {
        vm.services_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let has_service = Signal::derive(move || vm.selected_service.get().is_some());
    let delete_message = Signal::derive(move || {
        vm.delete_target
            .get()
            .map(|content| format!("Delete '{}'?", content.title))
            .unwrap_or_default()
    });

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Content"</h1>
                    <p class="mt-1 text-sm text-fg-muted">"Images, videos and documents shown with each service."</p>
                </div>
                <MessageBanner messages=vm.messages />
                <label class="block text-sm text-fg-muted">
                    "Service"
                    <select
                        class="mt-1 block w-full md:w-80 border border-border rounded px-2 py-1 bg-surface"
                        prop:value=move || vm.selected_service.get().unwrap_or_default()
                        on:change=move |ev| vm.select_service(Some(event_target_value(&ev)))
                    >
                        <option value="">"Select a service"</option>
                        {move || services
                            .get()
                            .into_iter()
                            .map(|service| view! { <option value=service.id>{service.name}</option> })
                            .collect_view()}
                    </select>
                </label>
                <UploadForm
                    form=vm.form
                    file_meta=vm.file_meta
                    error=vm.form_error
                    disabled=Signal::derive(move || !has_service.get())
                    pending=vm.upload_action.pending()
                    on_file=Callback::new(move |file| vm.pick_file(file))
                    on_submit=Callback::new(move |_| vm.submit())
                />
                <ContentList
                    contents_resource=vm.contents_resource
                    has_service=has_service
                    on_delete=Callback::new(move |content: ServiceContent| vm.delete_target.set(Some(content)))
                />
            </div>
            <ConfirmDialog
                is_open=Signal::derive(move || vm.delete_target.get().is_some())
                title="Delete content"
                message=delete_message
                confirm_label="Delete"
                destructive=true
                confirm_disabled=vm.delete_action.pending()
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.delete_target.set(None))
            />
        </Layout>
    }
}
