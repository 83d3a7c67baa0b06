use super::{
    components::{AssignUserDialog, AttendanceHeader, ManualAttendanceDialog, RosterTable, SchedulePicker},
    layout::AttendanceFrame,
    view_model::{use_attendance_view_model, AttendanceViewModel},
};
use crate::components::{
    confirm_dialog::ConfirmDialog,
    empty_state::EmptyState,
    layout::{ErrorMessage, LoadingSpinner},
};
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    view! {
        <AttendanceFrame>
            <AttendancePanel />
        </AttendanceFrame>
    }
}

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let vm = use_attendance_view_model();

    #[cfg(target_arch = "wasm32")]
    {
        use super::utils::STATUS_TICK_MS;
        use gloo_timers::callback::Interval;

        let _ticker = store_value(Interval::new(STATUS_TICK_MS, move || vm.tick()));
    }

    view! {
        <div class="grid grid-cols-1 xl:grid-cols-4 gap-6">
            <div class="xl:col-span-1">
                <SchedulePicker vm=vm />
            </div>
            <div class="xl:col-span-3 space-y-6">
                <AttendanceManager vm=vm />
            </div>
        </div>
        <ManualAttendanceDialog vm=vm />
        <AssignUserDialog vm=vm />
        <ConfirmDialog
            is_open=Signal::derive(move || vm.pending_delete.with(|p| p.is_some()))
            title="Delete attendance?"
            message="This attendance record will be permanently removed."
            confirm_label="Delete"
            on_confirm=Callback::new(move |_| spawn_local(async move { vm.confirm_delete().await }))
            on_cancel=Callback::new(move |_| vm.pending_delete.set(None))
            destructive=true
        />
    }
}

#[component]
fn AttendanceManager(vm: AttendanceViewModel) -> impl IntoView {
    move || {
        if vm.selected_schedule.with(|s| s.is_none()) {
            return view! {
                <EmptyState
                    title="No schedule selected"
                    description="Choose a schedule from the list to view its attendance."
                />
            }
            .into_view();
        }
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
        if vm.roster.with(|r| r.is_none()) {
            return if vm.loading.get() {
                view! { <LoadingSpinner /> }.into_view()
            } else {
                view! {
                    <EmptyState
                        title="No Data"
                        description="No attendance data is available for this schedule."
                    />
                }
                .into_view()
            };
        }
        view! {
            <AttendanceHeader vm=vm />
            <RosterTable vm=vm />
        }
        .into_view()
    }
}
