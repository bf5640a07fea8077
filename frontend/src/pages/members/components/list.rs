use crate::{
    api::{ApiError, Member},
    components::{
        common::Pager, empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner,
    },
    pages::members::utils::can_delete,
    utils::{
        format::{display_or_dash, format_datetime},
        pagination::Page,
    },
};
use leptos::*;

#[component]
pub fn MemberList(
    members_resource: Resource<u32, Result<Vec<Member>, ApiError>>,
    visible: Memo<Page<Member>>,
    current_user_id: Memo<Option<String>>,
    on_page: Callback<usize>,
    on_edit: Callback<Member>,
    on_delete: Callback<Member>,
) -> impl IntoView {
    let fetch_error = Signal::derive(move || members_resource.get().and_then(|result| result.err()));
    let loading = members_resource.loading();
    let items = Signal::derive(move || visible.get().items);
    let page = Signal::derive(move || visible.get().page);
    let total_pages = Signal::derive(move || visible.get().total_pages);

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <InlineErrorMessage error=fetch_error />
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            <Show when=move || !loading.get() && items.get().is_empty() && fetch_error.get().is_none()>
                <EmptyState title="No members found" />
            </Show>
            <Show when=move || !items.get().is_empty()>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border text-sm">
                        <thead>
                            <tr>
                                <th class="px-4 py-2 text-left font-medium text-fg-muted">"Name"</th>
                                <th class="px-4 py-2 text-left font-medium text-fg-muted">"Email"</th>
                                <th class="px-4 py-2 text-left font-medium text-fg-muted">"Phone"</th>
                                <th class="px-4 py-2 text-left font-medium text-fg-muted">"Role"</th>
                                <th class="px-4 py-2 text-left font-medium text-fg-muted">"Joined"</th>
                                <th class="px-4 py-2"></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || items.get()
                                key=|member| member.id.clone()
                                children=move |member: Member| {
                                    let deletable = can_delete(
                                        &member,
                                        current_user_id.get_untracked().as_deref(),
                                    );
                                    let edit_target = member.clone();
                                    let delete_target = member.clone();
                                    view! {
                                        <tr>
                                            <td class="px-4 py-2 text-fg font-medium">{member.name.clone()}</td>
                                            <td class="px-4 py-2 text-fg">{member.email.clone()}</td>
                                            <td class="px-4 py-2 text-fg-muted">{display_or_dash(member.phone.as_deref())}</td>
                                            <td class="px-4 py-2 text-fg">{member.role.label()}</td>
                                            <td class="px-4 py-2 text-fg-muted">{format_datetime(member.created_at)}</td>
                                            <td class="px-4 py-2 text-right space-x-2 whitespace-nowrap">
                                                <button
                                                    type="button"
                                                    class="text-action-primary-bg hover:underline"
                                                    on:click=move |_| on_edit.call(edit_target.clone())
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    type="button"
                                                    class="text-status-error-text hover:underline disabled:opacity-40 disabled:no-underline"
                                                    disabled=!deletable
                                                    title=if deletable { "" } else { "You cannot delete your own account" }
                                                    on:click=move |_| on_delete.call(delete_target.clone())
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
                <Pager page=page total_pages=total_pages on_change=on_page />
            </Show>
        </div>
    }
}
