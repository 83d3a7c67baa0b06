use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{guard::RequireAuth, session_expired::SessionExpiredDialog, toast::ToastHost},
    pages::{AttendancePage, DashboardPage, LoginPage, SchedulesPage, UsersPage},
    state::{auth::AuthProvider, toast::provide_toasts},
};

pub const ROUTE_PATHS: &[&str] = &["/", "/login", "/dashboard", "/attendances", "/schedules", "/users"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/dashboard", "/attendances", "/schedules", "/users"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_toasts();
    provide_meta_context();
    view! {
        <Title text="Campus Attendance Admin"/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=|| view! { <Redirect path="/dashboard"/> }/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/attendances" view=ProtectedAttendances/>
                    <Route path="/schedules" view=ProtectedSchedules/>
                    <Route path="/users" view=ProtectedUsers/>
                </Routes>
            </Router>
            <SessionExpiredDialog/>
            <ToastHost/>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedAttendances() -> impl IntoView {
    view! { <RequireAuth><AttendancePage/></RequireAuth> }
}

#[component]
fn ProtectedSchedules() -> impl IntoView {
    view! { <RequireAuth><SchedulesPage/></RequireAuth> }
}

#[component]
fn ProtectedUsers() -> impl IntoView {
    view! { <RequireAuth><UsersPage/></RequireAuth> }
}
