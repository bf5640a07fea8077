use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus",
            ButtonVariant::Secondary => "bg-surface-muted hover:bg-surface-elevated text-fg border border-border",
            ButtonVariant::Danger => "bg-action-danger-bg hover:bg-action-danger-bg-hover text-action-danger-text",
            ButtonVariant::Ghost => "text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let class = format!(
        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
        variant.classes(),
        class
    );
    let is_loading = Signal::derive(move || loading.get());
    view! {
        <button
            class=class
            disabled=move || disabled.get() || is_loading.get()
            {..attributes}
        >
            <Show when=move || is_loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

/// Previous / next controls shared by the paginated tables.
#[component]
pub fn Pager(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    on_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between pt-4 text-sm text-fg-muted">
            <button
                type="button"
                class="px-3 py-1 rounded border border-border disabled:opacity-50"
                disabled=move || page.get() <= 1
                on:click=move |_| on_change.call(page.get_untracked().saturating_sub(1).max(1))
            >
                "Previous"
            </button>
            <span>{move || format!("Page {} of {}", page.get(), total_pages.get())}</span>
            <button
                type="button"
                class="px-3 py-1 rounded border border-border disabled:opacity-50"
                disabled=move || page.get() >= total_pages.get()
                on:click=move |_| on_change.call(page.get_untracked() + 1)
            >
                "Next"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_distinct_classes() {
        assert!(ButtonVariant::Primary.classes().contains("bg-action-primary-bg"));
        assert!(ButtonVariant::Danger.classes().contains("bg-action-danger-bg"));
        assert_ne!(ButtonVariant::Secondary.classes(), ButtonVariant::Ghost.classes());
    }
}
