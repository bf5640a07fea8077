use crate::{state::auth::use_auth, utils::navigation};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    create_effect(move |_| {
        if let Some(target) = redirect_target(is_authenticated.get(), true, false) {
            navigation::redirect_to(target);
        }
    });
    view! {
        <Show when=move || is_authenticated.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_admin = create_memo(move |_| auth.get().is_admin());
    create_effect(move |_| {
        if let Some(target) = redirect_target(is_authenticated.get(), is_admin.get(), true) {
            navigation::redirect_to(target);
        }
    });
    view! {
        <Show
            when=move || should_render_admin_children(is_authenticated.get(), is_admin.get())
            fallback=|| ()
        >
            {children()}
        </Show>
    }
}

fn should_render_admin_children(is_authenticated: bool, is_admin: bool) -> bool {
    is_authenticated && is_admin
}

fn redirect_target(
    is_authenticated: bool,
    is_admin: bool,
    admin_required: bool,
) -> Option<&'static str> {
    if !is_authenticated {
        Some("/login")
    } else if admin_required && !is_admin {
        Some("/dashboard")
    } else {
        None
    }
}
