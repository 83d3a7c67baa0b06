use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn DashboardFrame(
    #[prop(into)] refreshing: Signal<bool>,
    on_refresh: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-2xl font-bold text-gray-900">"Dashboard"</h1>
                        <p class="text-sm text-gray-500">"Attendance and membership at a glance"</p>
                    </div>
                    <button
                        type="button"
                        class="px-4 py-2 rounded-lg border border-gray-300 text-sm text-gray-700 hover:bg-gray-100 disabled:opacity-50"
                        disabled=move || refreshing.get()
                        on:click=move |_| on_refresh.call(())
                    >
                        {move || if refreshing.get() { "Refreshing..." } else { "Refresh" }}
                    </button>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
