use super::{
    components::{ScheduleCard, ScheduleFilters, ScheduleFormDialog, ScheduleSummaryCards},
    layout::SchedulesFrame,
    utils::{apply_filter, showing_label, summarize},
    view_model::{use_schedule_view_model, ScheduleViewModel},
};
use crate::{
    components::{
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    utils::time,
};
use leptos::*;

#[component]
pub fn SchedulesPage() -> impl IntoView {
    view! {
        <SchedulesFrame>
            <SchedulesPanel />
        </SchedulesFrame>
    }
}

#[component]
pub fn SchedulesPanel() -> impl IntoView {
    let vm = use_schedule_view_model();
    create_effect(move |_| vm.refresh());

    let summary = Signal::derive(move || vm.schedules.with(|list| summarize(list, time::today_local())));

    view! {
        <ScheduleSummaryCards summary=summary />
        <ScheduleFilters vm=vm />
        <ScheduleList vm=vm />
        <ScheduleFormDialog vm=vm />
        <ConfirmDialog
            is_open=Signal::derive(move || vm.pending_delete.with(|p| p.is_some()))
            title="Delete schedule?"
            message=Signal::derive(move || {
                vm.pending_delete.with(|p| {
                    p.as_ref()
                        .map(|s| format!("\"{}\" and its assignments will be removed.", s.class_name))
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
fn ScheduleList(vm: ScheduleViewModel) -> impl IntoView {
    let visible = move || vm.schedules.with(|list| vm.filter.with(|f| apply_filter(list, f)));

    move || {
        if let Some(message) = vm.error.get() {
            return view! {
                <div class="space-y-3">
                    <ErrorMessage message=message />
                    <button
                        type="button"
                        class="px-4 py-2 rounded-lg bg-orange-600 text-white hover:bg-orange-700"
                        on:click=move |_| vm.refresh()
                    >
                        "Try Again"
                    </button>
                </div>
            }
            .into_view();
        }
        if vm.loading.get() && vm.schedules.with(|l| l.is_empty()) {
            return view! { <LoadingSpinner /> }.into_view();
        }
        let shown = visible();
        let total = vm.schedules.with(|l| l.len());
        let filtered = vm.filter.with(|f| f.is_filtered());
        if shown.is_empty() {
            let description = if filtered {
                "Try adjusting the filters."
            } else {
                "Create the first schedule to get started."
            };
            return view! { <EmptyState title="No schedules found" description=description /> }.into_view();
        }
        view! {
            <p class="text-sm text-gray-500">{showing_label(shown.len(), total, filtered)}</p>
            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4">
                {shown
                    .into_iter()
                    .map(|schedule| view! { <ScheduleCard vm=vm schedule=schedule /> })
                    .collect_view()}
            </div>
        }
        .into_view()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::pages::schedules::repository::ScheduleRepository;
    use crate::test_support::{
        helpers::{admin_user, provide_auth, schedule},
        ssr::render_to_string,
    };

    #[test]
    fn filtered_list_reports_counts() {
        let html = render_to_string(|| {
            provide_auth(Some(admin_user()));
            let vm = ScheduleViewModel::new_with_repository(ScheduleRepository::default());
            let mut other = schedule("2", "2025-03-04T00:00:00.000Z", "", "");
            other.class_name = "Robotics".into();
            vm.schedules.set(vec![schedule("1", "2025-03-03T00:00:00.000Z", "", ""), other]);
            vm.filter.update(|f| f.search = "robot".into());
            view! { <ScheduleList vm=vm /> }
        });
        assert!(html.contains("Showing 1 of 2 schedules (filtered)"));
        assert!(html.contains("Robotics"));
    }

    #[test]
    fn page_renders_frame_and_controls() {
        let html = render_to_string(|| {
            provide_auth(Some(admin_user()));
            provide_context(ApiClient::new_with_base_url("http://127.0.0.1:9/api"));
            view! { <SchedulesPage /> }
        });
        assert!(html.contains("Schedules"));
        assert!(html.contains("New Schedule"));
        assert!(html.contains("Total Schedules"));
    }
}
