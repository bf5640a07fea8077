use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::{RequireAdmin, RequireAuth},
    pages::{BookingsPage, ContentsPage, DashboardPage, LoginPage, MembersPage, ServicesPage},
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/dashboard",
    "/bookings",
    "/services",
    "/contents",
    "/settings",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/dashboard",
    "/bookings",
    "/services",
    "/contents",
    "/settings",
];

pub const ADMIN_ROUTE_PATHS: &[&str] = &["/settings"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=|| view! { <Redirect path="/dashboard"/> }/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/bookings" view=ProtectedBookings/>
                    <Route path="/services" view=ProtectedServices/>
                    <Route path="/contents" view=ProtectedContents/>
                    <Route path="/settings" view=AdminSettings/>
                    <Route path="/*any" view=|| view! { <Redirect path="/dashboard"/> }/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedBookings() -> impl IntoView {
    view! { <RequireAuth><BookingsPage/></RequireAuth> }
}

#[component]
fn ProtectedServices() -> impl IntoView {
    view! { <RequireAuth><ServicesPage/></RequireAuth> }
}

#[component]
fn ProtectedContents() -> impl IntoView {
    view! { <RequireAuth><ContentsPage/></RequireAuth> }
}

#[component]
fn AdminSettings() -> impl IntoView {
    view! { <RequireAdmin><MembersPage/></RequireAdmin> }
}
