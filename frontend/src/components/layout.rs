use crate::{
    api::Role,
    components::confirm_dialog::ConfirmDialog,
    state::auth::{self, use_auth},
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Dashboard", path: "/dashboard" },
    NavItem { label: "Attendances", path: "/attendances" },
    NavItem { label: "Users", path: "/users" },
    NavItem { label: "Schedules", path: "/schedules" },
];

/// Role hint only trims the menu. Unknown roles see everything and the
/// backend decides.
pub fn nav_items(role: Option<Role>) -> Vec<NavItem> {
    let can_manage_users = matches!(role, None | Some(Role::Admin) | Some(Role::MainTeam) | Some(Role::Unknown));
    NAV_ITEMS
        .into_iter()
        .filter(|item| item.path != "/users" || can_manage_users)
        .collect()
}

fn current_path() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (confirm_open, set_confirm_open) = create_signal(false);
    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    let path = current_path();

    let items = move || nav_items(auth.get().user.and_then(|u| u.role));
    let display_name = move || {
        auth.get()
            .user
            .map(|u| u.display_name())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "User".to_string())
    };
    let role_label = move || {
        auth.get()
            .user
            .and_then(|u| u.role)
            .map(|r| r.label())
            .unwrap_or_default()
    };

    let on_confirm = Callback::new(move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        set_confirm_open.set(false);
        logout_action.dispatch(());
    });
    let on_cancel = Callback::new(move |_| set_confirm_open.set(false));

    view! {
        <aside class="fixed left-0 top-0 h-full w-64 bg-white z-50 border-r border-gray-200 flex flex-col">
            <div class="flex justify-center items-center gap-3 mt-5 mb-8">
                <h1 class="text-orange-500 font-semibold text-xl">"IoT Campus"</h1>
            </div>
            <nav class="px-4 flex-grow">
                <ul>
                    {move || {
                        let path = path.clone();
                        items()
                            .into_iter()
                            .map(|item| {
                                let class = if path == item.path {
                                    "flex items-center px-4 py-3 rounded-lg bg-orange-50 text-orange-600 font-bold"
                                } else {
                                    "flex items-center px-4 py-3 rounded-lg text-gray-600 hover:bg-gray-100"
                                };
                                view! {
                                    <li>
                                        <a href=item.path class=class>{item.label}</a>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </nav>
            <div class="px-4 py-3 border-t border-gray-200 flex items-center justify-between">
                <div>
                    <p class="text-sm font-medium text-gray-900">{display_name}</p>
                    <p class="text-xs text-gray-500">{role_label}</p>
                </div>
                <button
                    type="button"
                    class="text-gray-600 hover:text-orange-500 text-sm disabled:opacity-50"
                    disabled=move || logout_pending.get()
                    on:click=move |_| set_confirm_open.set(true)
                >
                    "Logout"
                </button>
            </div>
            <ConfirmDialog
                is_open=Signal::derive(move || confirm_open.get())
                title="Log out?"
                message="Are you sure you want to log out? Your session will be ended."
                confirm_label="Logout"
                cancel_label="Cancel"
                on_confirm=on_confirm
                on_cancel=on_cancel
                destructive=true
            />
        </aside>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <Sidebar/>
            <main class="ml-64 p-6">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-orange-500"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}
