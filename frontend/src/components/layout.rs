use crate::{
    api::SessionUser,
    state::auth::{self, use_auth},
    utils::{message::MessageState, navigation},
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub admin_only: bool,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { href: "/dashboard", label: "Dashboard", admin_only: false },
    NavItem { href: "/bookings", label: "Bookings", admin_only: false },
    NavItem { href: "/services", label: "Services", admin_only: false },
    NavItem { href: "/contents", label: "Content", admin_only: false },
    NavItem { href: "/settings", label: "Settings", admin_only: true },
];

pub fn visible_nav_items(is_admin: bool) -> Vec<NavItem> {
    NAV_ITEMS
        .into_iter()
        .filter(|item| is_admin || !item.admin_only)
        .collect()
}

fn user_caption(user: Option<&SessionUser>) -> (String, String) {
    match user {
        Some(user) => (user.name.clone(), user.role.label().to_string()),
        None => (String::new(), String::new()),
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let is_admin = create_memo(move |_| auth.get().is_admin());
    let caption = create_memo(move |_| user_caption(auth.get().user.as_ref()));

    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            navigation::redirect_to("/login");
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        set_menu_open.set(false);
        logout_action.dispatch(());
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    let nav_links = move || {
        visible_nav_items(is_admin.get())
            .into_iter()
            .map(|item| {
                view! {
                    <a
                        href=item.href
                        class="block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        {item.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <aside class="bg-surface-elevated border-b lg:border-b-0 lg:border-r border-border lg:w-64 lg:min-h-screen">
            <div class="flex items-center justify-between h-16 px-4">
                <span class="text-xl font-semibold text-fg">"ESPOINT"</span>
                <button
                    type="button"
                    class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                    on:click=toggle_menu
                    aria-expanded=move || menu_open.get()
                    aria-controls="sidebar-nav"
                >
                    <span class="sr-only">
                        {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                    </span>
                    <svg class="h-6 w-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                    </svg>
                </button>
            </div>
            <div
                id="sidebar-nav"
                class=move || if menu_open.get() { "block px-4 pb-4" } else { "hidden lg:block px-4 pb-4" }
            >
                <nav class="space-y-1">{nav_links}</nav>
                <div class="mt-6 border-t border-border pt-4">
                    <p class="text-sm font-medium text-fg">{move || caption.get().0}</p>
                    <p class="text-xs text-fg-muted">{move || caption.get().1}</p>
                    <button
                        on:click=on_logout
                        class="mt-3 w-full text-left text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50 hover:bg-action-ghost-bg-hover"
                        disabled=move || logout_pending.get()
                    >
                        "Sign out"
                    </button>
                </div>
            </div>
        </aside>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface lg:flex">
            <Sidebar/>
            <main class="flex-1 py-6 px-4 sm:px-6 lg:px-8">{children()}</main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" role="status">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4" role="alert">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4" role="status">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn MessageBanner(messages: RwSignal<MessageState>) -> impl IntoView {
    view! {
        <Show when=move || messages.get().error.is_some()>
            <ErrorMessage message=messages.get().error.unwrap_or_default() />
        </Show>
        <Show when=move || messages.get().success.is_some()>
            <SuccessMessage message=messages.get().success.unwrap_or_default() />
        </Show>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn sidebar_shows_settings_for_admin() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <Sidebar /> }
        });
        assert!(html.contains("Settings"));
        assert!(html.contains("Admin User"));
        assert!(html.contains("Sign out"));
    }

    #[test]
    fn sidebar_hides_settings_for_regular_member() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <Sidebar /> }
        });
        assert!(html.contains("Bookings"));
        assert!(!html.contains("/settings"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="error" />
                    <SuccessMessage message="ok" />
                </div>
            }
        });
        assert!(html.contains("error"));
        assert!(html.contains("ok"));
    }

    #[test]
    fn message_banner_shows_current_message() {
        let html = render_to_string(move || {
            let messages = create_rw_signal(MessageState::default());
            messages.update(|state| state.set_success("Service saved"));
            view! { <MessageBanner messages=messages /> }
        });
        assert!(html.contains("Service saved"));
        assert!(!html.contains("role=\"alert\""));
    }
}
