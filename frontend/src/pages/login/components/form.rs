use crate::{components::error::{FieldError, InlineErrorMessage}, pages::login::view_model::LoginViewModel};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "appearance-none block w-full px-3 py-2 border border-gray-300 rounded-md placeholder-gray-400 text-gray-900 focus:outline-none focus:ring-orange-500 focus:border-orange-500 sm:text-sm";

#[component]
pub fn LoginForm(vm: LoginViewModel) -> impl IntoView {
    let form = vm.form;
    let pending = vm.login_action.pending();
    let email_error = form.field_error("email");
    let password_error = form.field_error("password");

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4">
            <div class="max-w-md w-full space-y-8 bg-white p-8 rounded-lg shadow">
                <div>
                    <h2 class="text-center text-3xl font-extrabold text-gray-900">"IoT Campus Attendance"</h2>
                    <p class="mt-2 text-center text-sm text-gray-600">"Sign in to the admin dashboard"</p>
                </div>
                <form class="space-y-5" on:submit=on_submit novalidate>
                    <div>
                        <label for="email" class="block text-sm font-medium text-gray-700">"Email"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            autocomplete="email"
                            class=INPUT_CLASS
                            placeholder="you@example.com"
                            prop:value=move || form.email.get()
                            on:input=move |ev| {
                                form.email.set(event_target_value(&ev));
                                form.clear_error("email");
                            }
                        />
                        <FieldError error=email_error />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-gray-700">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            class=INPUT_CLASS
                            prop:value=move || form.password.get()
                            on:input=move |ev| {
                                form.password.set(event_target_value(&ev));
                                form.clear_error("password");
                            }
                        />
                        <FieldError error=password_error />
                    </div>

                    <InlineErrorMessage error=vm.error />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-white bg-orange-500 hover:bg-orange-600 disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
