use crate::{
    pages::login::{components::form::LoginForm, view_model::use_login_view_model},
    state::auth::use_auth,
    utils::navigation,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    create_effect(move |_| {
        if auth.get().is_authenticated {
            navigation::redirect_to("/dashboard");
        }
    });

    let vm = use_login_view_model();
    let pending = vm.login_action.pending();
    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <LoginForm
            form=vm.form
            error=vm.error
            pending=pending.into()
            on_submit=on_submit
        />
    }
}
