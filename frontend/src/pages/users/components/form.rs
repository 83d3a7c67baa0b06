use crate::{
    api::Role,
    components::error::FieldError,
    pages::users::{utils::UserDraft, view_model::UsersViewModel},
};
use leptos::*;

#[component]
fn Field(
    vm: UsersViewModel,
    field: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    get: fn(&UserDraft) -> String,
    set: fn(&mut UserDraft, String),
) -> impl IntoView {
    let form = vm.form;
    view! {
        <label class="block text-sm font-medium text-gray-700">
            {label}
            <input
                type=input_type
                class="mt-1 block w-full border border-gray-300 rounded-md px-3 py-2 text-sm"
                prop:value=move || form.draft.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(field, |d| set(d, value));
                }
            />
            <FieldError error=form.field_error(field) />
        </label>
    }
}

#[component]
pub fn UserFormDialog(vm: UsersViewModel) -> impl IntoView {
    let form = vm.form;
    let editing = move || form.editing_id.with(|id| id.is_some());
    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move { vm.submit().await });
    };

    view! {
        <Show when=move || vm.form_open.get()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-black/40"
                    on:click=move |_| vm.close_form()
                ></button>
                <form
                    class="relative z-[61] w-full max-w-lg rounded-lg bg-white shadow-xl p-6 space-y-4"
                    role="dialog"
                    on:submit=submit
                >
                    <h2 class="text-lg font-semibold text-gray-900">
                        {move || if editing() { "Edit User" } else { "Add User" }}
                    </h2>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <Field vm=vm field="username" label="Username"
                            get=|d| d.username.clone() set=|d, v| d.username = v />
                        <Field vm=vm field="fullName" label="Full Name"
                            get=|d| d.full_name.clone() set=|d, v| d.full_name = v />
                        <Field vm=vm field="email" label="Email" input_type="email"
                            get=|d| d.email.clone() set=|d, v| d.email = v />
                        <Field vm=vm field="rfidCard" label="RFID Card"
                            get=|d| d.rfid_card.clone() set=|d, v| d.rfid_card = v />
                        <Field vm=vm field="password" input_type="password"
                            label={if form.is_editing() { "Password (leave blank to keep)" } else { "Password" }}
                            get=|d| d.password.clone() set=|d, v| d.password = v />
                        <label class="block text-sm font-medium text-gray-700">
                            "Role"
                            <select
                                class="mt-1 block w-full border border-gray-300 rounded-md px-3 py-2 text-sm"
                                on:change=move |ev| {
                                    if let Some(role) = Role::parse(&event_target_value(&ev)) {
                                        form.update("role", |d| d.role = role);
                                    }
                                }
                            >
                                {Role::ALL
                                    .into_iter()
                                    .map(|role| view! {
                                        <option
                                            value=role.as_str()
                                            selected=move || form.draft.with(|d| d.role == role)
                                        >
                                            {role.label()}
                                        </option>
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                    </div>
                    <label class="flex items-center gap-2 text-sm text-gray-700">
                        <input
                            type="checkbox"
                            prop:checked=move || form.draft.with(|d| d.is_active)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                form.update("isActive", |d| d.is_active = checked);
                            }
                        />
                        "Active"
                    </label>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-gray-100 text-gray-800 hover:bg-gray-200"
                            on:click=move |_| vm.close_form()
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-orange-500 text-white hover:bg-orange-600 disabled:opacity-50"
                            disabled=move || vm.submitting.get()
                        >
                            {move || if vm.submitting.get() { "Saving..." } else if editing() { "Update" } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{pages::users::repository::UsersRepository, test_support::ssr::render_to_string};

    #[test]
    fn create_form_shows_required_password_error() {
        let html = render_to_string(|| {
            let vm = UsersViewModel::new_with_repository(UsersRepository::default());
            vm.open_create();
            vm.form
                .field_errors
                .update(|e| e.insert("password", "Password is required"));
            view! { <UserFormDialog vm=vm /> }
        });
        assert!(html.contains("Add User"));
        assert!(html.contains("Password is required"));
        assert!(!html.contains("leave blank to keep"));
        assert!(html.contains("Main Team"));
    }
}
