use crate::{
    api::Service,
    components::{
        confirm_dialog::ConfirmDialog,
        dialog::FormDialog,
        layout::{Layout, MessageBanner},
    },
};
use leptos::*;

use super::{
    components::{form::ServiceForm, list::ServiceList},
    view_model::use_services_view_model,
};

#[component]
pub fn ServicesPage() -> impl IntoView {
    let vm = use_services_view_model();

    let dialog_title = Signal::derive(move || {
        if vm.editing.get().is_some() {
            "Edit service".to_string()
        } else {
            "New service".to_string()
        }
    });
    let delete_message = Signal::derive(move || {
        vm.delete_target
            .get()
            .map(|service| format!("Delete '{}'? Its bookings stay on record.", service.name))
            .unwrap_or_default()
    });

    let on_edit = Callback::new(move |service: Service| vm.open_edit(service));
    let on_toggle = Callback::new(move |service: Service| {
        vm.messages.update(|state| state.clear());
        vm.toggle_action.dispatch(service);
    });
    let on_delete = Callback::new(move |service: Service| vm.delete_target.set(Some(service)));

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-2xl font-bold text-fg">"Services"</h1>
                        <p class="mt-1 text-sm text-fg-muted">"Manage the services clients can book."</p>
                    </div>
                    <button
                        type="button"
                        class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text"
                        on:click=move |_| vm.open_create()
                    >
                        "New service"
                    </button>
                </div>
                <MessageBanner messages=vm.messages />
                <ServiceList
                    services_resource=vm.services_resource
                    on_edit=on_edit
                    on_toggle=on_toggle
                    on_delete=on_delete
                />
            </div>
            <FormDialog
                is_open=vm.dialog_open
                title=dialog_title
                on_close=Callback::new(move |_| vm.close_dialog())
            >
                <ServiceForm
                    form=vm.form
                    error=vm.form_error
                    pending=vm.save_action.pending()
                    on_submit=Callback::new(move |_| vm.submit())
                    on_cancel=Callback::new(move |_| vm.close_dialog())
                />
            </FormDialog>
            <ConfirmDialog
                is_open=Signal::derive(move || vm.delete_target.get().is_some())
                title="Delete service"
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
