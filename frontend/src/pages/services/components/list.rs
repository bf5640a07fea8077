use crate::{
    api::{ApiError, Service},
    components::{empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner},
    utils::format::{display_or_dash, format_amount},
};
use leptos::*;

pub fn capacity_label(capacity: Option<u32>) -> String {
    capacity
        .map(|c| c.to_string())
        .unwrap_or_else(|| "Unlimited".into())
}

#[component]
pub fn ServiceList(
    services_resource: Resource<u32, Result<Vec<Service>, ApiError>>,
    on_edit: Callback<Service>,
    on_toggle: Callback<Service>,
    on_delete: Callback<Service>,
) -> impl IntoView {
    let services = Signal::derive(move || {
        services_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let fetch_error = Signal::derive(move || services_resource.get().and_then(|result| result.err()));
    let loading = services_resource.loading();

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <InlineErrorMessage error=fetch_error />
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            <Show when=move || !loading.get() && services.get().is_empty() && fetch_error.get().is_none()>
                <EmptyState title="No services yet" description="Create a service to start taking bookings." />
            </Show>
            <Show when=move || !services.get().is_empty()>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border text-sm">
                        <thead>
                            <tr>
                                <th class="px-4 py-2 text-left font-medium text-fg-muted">"Name"</th>
                                <th class="px-4 py-2 text-left font-medium text-fg-muted">"Category"</th>
                                <th class="px-4 py-2 text-right font-medium text-fg-muted">"Price"</th>
                                <th class="px-4 py-2 text-right font-medium text-fg-muted">"Capacity"</th>
                                <th class="px-4 py-2 text-left font-medium text-fg-muted">"Status"</th>
                                <th class="px-4 py-2"></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || services.get()
                                key=|service| (service.id.clone(), service.is_active)
                                children=move |service: Service| {
                                    let edit_target = service.clone();
                                    let toggle_target = service.clone();
                                    let delete_target = service.clone();
                                    view! {
                                        <tr>
                                            <td class="px-4 py-2 text-fg font-medium">{service.name.clone()}</td>
                                            <td class="px-4 py-2 text-fg-muted">
                                                {display_or_dash(service.category.as_deref())}
                                            </td>
                                            <td class="px-4 py-2 text-right text-fg">
                                                {format_amount(service.price, None)}
                                            </td>
                                            <td class="px-4 py-2 text-right text-fg">
                                                {capacity_label(service.capacity)}
                                            </td>
                                            <td class="px-4 py-2">
                                                {if service.is_active {
                                                    view! { <span class="text-status-success-text">"Active"</span> }
                                                } else {
                                                    view! { <span class="text-fg-muted">"Inactive"</span> }
                                                }}
                                            </td>
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
                                                    class="text-fg-muted hover:underline"
                                                    on:click=move |_| on_toggle.call(toggle_target.clone())
                                                >
                                                    {if service.is_active { "Deactivate" } else { "Activate" }}
                                                </button>
                                                <button
                                                    type="button"
                                                    class="text-status-error-text hover:underline"
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
            </Show>
        </div>
    }
}
