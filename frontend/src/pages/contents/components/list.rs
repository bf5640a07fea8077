use crate::{
    api::{ApiError, MediaKind, ServiceContent},
    components::{empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner},
    utils::format::format_datetime,
};
use leptos::*;

#[component]
pub fn MediaPreview(content: ServiceContent) -> impl IntoView {
    let url = content.media_url.clone();
    match content.media_kind() {
        MediaKind::Image => view! {
            <img src=url alt=content.title class="h-40 w-full object-cover rounded" />
        }
        .into_view(),
        MediaKind::Video => view! {
            <video src=url controls=true preload="metadata" class="h-40 w-full rounded bg-black"></video>
        }
        .into_view(),
        MediaKind::Document => view! {
            <a href=url target="_blank" rel="noopener" class="flex h-40 items-center justify-center rounded border border-border text-action-primary-bg hover:underline">
                "Open document"
            </a>
        }
        .into_view(),
    }
}

#[component]
pub fn ContentList(
    contents_resource: Resource<(Option<String>, u32), Result<Vec<ServiceContent>, ApiError>>,
    #[prop(into)] has_service: Signal<bool>,
    on_delete: Callback<ServiceContent>,
) -> impl IntoView {
    let contents = Signal::derive(move || {
        contents_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let fetch_error = Signal::derive(move || contents_resource.get().and_then(|result| result.err()));
    let loading = contents_resource.loading();

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <Show
                when=move || has_service.get()
                fallback=|| view! { <EmptyState title="Pick a service" description="Choose a service to see its content." /> }
            >
                <InlineErrorMessage error=fetch_error />
                <Show when=move || loading.get()>
                    <LoadingSpinner />
                </Show>
                <Show when=move || !loading.get() && contents.get().is_empty() && fetch_error.get().is_none()>
                    <EmptyState title="No content yet" description="Upload images, videos or PDFs for this service." />
                </Show>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2 lg:grid-cols-3">
                    <For
                        each=move || contents.get()
                        key=|content| content.id.clone()
                        children=move |content: ServiceContent| {
                            let delete_target = content.clone();
                            view! {
                                <div class="rounded-lg border border-border p-3 space-y-2">
                                    <MediaPreview content=content.clone() />
                                    <p class="font-medium text-fg">{content.title.clone()}</p>
                                    {content.description.clone().map(|d| view! { <p class="text-sm text-fg-muted">{d}</p> })}
                                    <div class="flex items-center justify-between text-xs text-fg-muted">
                                        <span>{format_datetime(content.created_at)}</span>
                                        <button
                                            type="button"
                                            class="text-status-error-text hover:underline"
                                            on:click=move |_| on_delete.call(delete_target.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
