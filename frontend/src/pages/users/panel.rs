use super::{
    components::{UserFilters, UserFormDialog, UserTable},
    layout::UsersFrame,
    view_model::{use_users_view_model, UsersViewModel},
};
use crate::components::{
    confirm_dialog::ConfirmDialog,
    layout::{ErrorMessage, LoadingSpinner},
};
use leptos::*;

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <UsersFrame>
            <UsersPanel />
        </UsersFrame>
    }
}

#[component]
pub fn UsersPanel() -> impl IntoView {
    let vm = use_users_view_model();
    create_effect(move |_| vm.load_later());

    view! {
        <UserFilters vm=vm />
        <UserList vm=vm />
        <UserFormDialog vm=vm />
        <ConfirmDialog
            is_open=Signal::derive(move || vm.pending_delete.with(|p| p.is_some()))
            title="Delete user?"
            message=Signal::derive(move || {
                vm.pending_delete.with(|p| {
                    p.as_ref()
                        .map(|u| format!("{} will be permanently removed.", u.username))
                        .unwrap_or_default()
                })
            })
            confirm_label="Delete"
            on_confirm=Callback::new(move |_| spawn_local(async move { vm.confirm_delete().await }))
            on_cancel=Callback::new(move |_| vm.pending_delete.set(None))
            destructive=true
        />
    }
}

#[component]
fn UserList(vm: UsersViewModel) -> impl IntoView {
    move || {
        let empty = vm.users.with(|u| u.is_empty());
        match vm.error.get() {
            Some(message) if empty => view! { <ErrorMessage message=message /> }.into_view(),
            _ if empty && vm.loading.get() => view! { <LoadingSpinner /> }.into_view(),
            _ => view! { <UserTable vm=vm /> }.into_view(),
        }
    }
}
