use crate::components::{
    confirm_dialog::ConfirmDialog,
    dialog::FormDialog,
    layout::{Layout, MessageBanner},
};
use leptos::*;

use super::{
    components::{form::MemberForm, list::MemberList},
    view_model::use_members_view_model,
};
use crate::api::Member;

#[component]
pub fn MembersPage() -> impl IntoView {
    let vm = use_members_view_model();

    let dialog_title = Signal::derive(move || {
        if vm.editing.get().is_some() {
            "Edit member".to_string()
        } else {
            "New member".to_string()
        }
    });
    let is_edit = Signal::derive(move || vm.editing.get().is_some());
    let delete_message = Signal::derive(move || {
        vm.delete_target
            .get()
            .map(|member| format!("Delete {} ({})?", member.name, member.email))
            .unwrap_or_default()
    });

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-2xl font-bold text-fg">"Settings"</h1>
                        <p class="mt-1 text-sm text-fg-muted">"Manage who can sign in to the console."</p>
                    </div>
                    <button
                        type="button"
                        class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text"
                        on:click=move |_| vm.open_create()
                    >
                        "New member"
                    </button>
                </div>
                <MessageBanner messages=vm.messages />
                <input
                    type="search"
                    class="w-full md:w-80 border border-border rounded px-3 py-2 bg-surface"
                    placeholder="Search by name or email"
                    prop:value=vm.query
                    on:input=move |ev| vm.set_query(event_target_value(&ev))
                />
                <MemberList
                    members_resource=vm.members_resource
                    visible=vm.visible
                    current_user_id=vm.current_user_id
                    on_page=Callback::new(move |page: usize| vm.page.set(page))
                    on_edit=Callback::new(move |member: Member| vm.open_edit(member))
                    on_delete=Callback::new(move |member: Member| vm.request_delete(member))
                />
            </div>
            <FormDialog
                is_open=vm.dialog_open
                title=dialog_title
                on_close=Callback::new(move |_| vm.close_dialog())
            >
                <MemberForm
                    form=vm.form
                    error=vm.form_error
                    is_edit=is_edit
                    pending=vm.save_action.pending()
                    on_submit=Callback::new(move |_| vm.submit())
                    on_cancel=Callback::new(move |_| vm.close_dialog())
                />
            </FormDialog>
            <ConfirmDialog
                is_open=Signal::derive(move || vm.delete_target.get().is_some())
                title="Delete member"
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

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn members_page_renders_search_and_create() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <MembersPage /> }
        });
        assert!(html.contains("Settings"));
        assert!(html.contains("Search by name or email"));
        assert!(html.contains("New member"));
    }
}
