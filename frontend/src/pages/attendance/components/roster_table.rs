use crate::{
    api::{AttendanceRecord, AttendanceStatus, RosterRow},
    components::empty_state::EmptyState,
    pages::attendance::{utils::scan_time_label, view_model::AttendanceViewModel},
    utils::schedule_time::date_time_label,
};
use leptos::*;

const HEADERS: [&str; 8] = [
    "Name",
    "Email",
    "RFID Card",
    "Assigned At",
    "Scan Time",
    "Status",
    "Notes",
    "Actions",
];

/// Rows keep the server's order and are keyed by `(userId, assignedAt)`.
#[component]
pub fn RosterTable(vm: AttendanceViewModel) -> impl IntoView {
    let rows = move || {
        vm.roster
            .with(|r| r.as_ref().map(|r| r.attendance.clone()))
            .unwrap_or_default()
    };
    let is_empty = move || vm.roster.with(|r| r.as_ref().map(|r| r.attendance.is_empty()).unwrap_or(true));

    view! {
        <Show
            when=move || !is_empty()
            fallback=|| view! {
                <EmptyState
                    title="No participants assigned"
                    description="Use Add Participant to assign users to this schedule."
                />
            }
        >
            <div class="bg-white shadow rounded-lg overflow-x-auto">
                <table class="min-w-full text-sm">
                    <thead class="bg-gray-50">
                        <tr class="text-left text-xs uppercase text-gray-500">
                            {HEADERS.into_iter().map(|h| view! { <th class="px-4 py-3">{h}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        <For
                            each=rows
                            key=|row| row.key()
                            children=move |row| view! { <RosterLine vm=vm row=row /> }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

/// A refetch can change a row's attendance without changing its key, so the
/// line re-reads its current value from the roster.
#[component]
fn RosterLine(vm: AttendanceViewModel, row: RosterRow) -> impl IntoView {
    let key = row.key();
    let current = create_memo(move |_| {
        vm.roster
            .with(|roster| {
                roster
                    .as_ref()
                    .and_then(|r| r.attendance.iter().find(|item| item.key() == key).cloned())
            })
            .unwrap_or_else(|| row.clone())
    });
    let editing_id = create_memo(move |_| vm.edit.with(|d| d.as_ref().map(|d| d.attendance_id.clone())));

    let row_class = move || {
        if current.with(|r| r.attendance.is_some()) {
            ""
        } else {
            "bg-yellow-50/50"
        }
    };
    let rfid = move || match current.with(|r| r.rfid_card.clone()) {
        Some(card) => view! {
            <span class="px-2 py-0.5 rounded border border-gray-300 font-mono text-xs">{card}</span>
        }
        .into_view(),
        None => view! { <span class="italic text-gray-400">"No RFID"</span> }.into_view(),
    };
    let scan_time = move || {
        current.with(|r| match &r.attendance {
            Some(record) => view! { <span>{scan_time_label(record)}</span> }.into_view(),
            None => view! { <span class="italic text-gray-400">"Waiting for scan"</span> }.into_view(),
        })
    };
    let tail = move || {
        let row = current.get();
        match row.attendance.clone() {
            Some(record) if editing_id.get().as_deref() == Some(record.id.as_str()) => editor_cells(vm),
            Some(record) => scanned_cells(vm, record, row.user_id),
            None => missing_cells(vm, row),
        }
    };

    view! {
        <tr class=row_class>
            <td class="px-4 py-3">
                <div class="font-medium text-gray-900">{move || current.with(|r| r.user_name.clone())}</div>
                <div class="text-xs text-gray-500">{move || current.with(|r| format!("ID: {}", r.user_id))}</div>
            </td>
            <td class="px-4 py-3 text-gray-600">
                {move || current.with(|r| r.user_email.clone().unwrap_or_else(|| "-".into()))}
            </td>
            <td class="px-4 py-3">{rfid}</td>
            <td class="px-4 py-3 text-gray-600">{move || current.with(|r| date_time_label(&r.assigned_at))}</td>
            <td class="px-4 py-3 text-gray-600">{scan_time}</td>
            {tail}
        </tr>
    }
}

fn status_text(record: &AttendanceRecord) -> String {
    if record.is_late {
        format!("{} (Late)", record.status.as_str())
    } else {
        record.status.as_str().to_string()
    }
}

fn remove_button(vm: AttendanceViewModel, user_id: String) -> impl IntoView {
    view! {
        <button
            type="button"
            class="text-gray-500 hover:underline remove-assignment"
            on:click=move |_| {
                let user_id = user_id.clone();
                spawn_local(async move { vm.remove_assignment(user_id).await })
            }
        >
            "Remove"
        </button>
    }
}

fn scanned_cells(vm: AttendanceViewModel, record: AttendanceRecord, user_id: String) -> View {
    let badge = format!("px-2 py-0.5 rounded-full text-xs {}", record.status.badge_class());
    let status = status_text(&record);
    let notes = record.notes.clone().filter(|n| !n.trim().is_empty());
    let delete_id = record.id.clone();
    view! {
        <td class="px-4 py-3">
            <span class=badge>{status}</span>
        </td>
        <td class="px-4 py-3 text-gray-600">
            {match notes {
                Some(notes) => view! { <span>{notes}</span> }.into_view(),
                None => view! { <span class="italic text-gray-400">"No notes"</span> }.into_view(),
            }}
        </td>
        <td class="px-4 py-3 space-x-2">
            <button type="button" class="text-orange-600 hover:underline" on:click=move |_| vm.begin_edit(&record)>
                "Edit"
            </button>
            <button
                type="button"
                class="text-red-600 hover:underline"
                on:click=move |_| vm.request_delete(delete_id.clone())
            >
                "Delete"
            </button>
            {remove_button(vm, user_id)}
        </td>
    }
    .into_view()
}

fn missing_cells(vm: AttendanceViewModel, row: RosterRow) -> View {
    let user_id = row.user_id.clone();
    view! {
        <td class="px-4 py-3">
            <span class="px-2 py-0.5 rounded-full text-xs border border-gray-300 text-gray-600">"Not scanned"</span>
        </td>
        <td class="px-4 py-3 italic text-gray-400">"No notes"</td>
        <td class="px-4 py-3 space-x-2">
            <button
                type="button"
                class="text-orange-600 hover:underline manual-entry"
                on:click=move |_| vm.manual_target.set(Some(row.clone()))
            >
                "Manual Entry"
            </button>
            {remove_button(vm, user_id)}
        </td>
    }
    .into_view()
}

fn editor_cells(vm: AttendanceViewModel) -> View {
    view! {
        <td class="px-4 py-3">
            <select
                class="border rounded px-2 py-1"
                on:change=move |ev| {
                    if let Some(status) = AttendanceStatus::parse(&event_target_value(&ev)) {
                        vm.edit.update(|draft| {
                            if let Some(draft) = draft {
                                draft.status = status;
                            }
                        });
                    }
                }
            >
                {AttendanceStatus::ALL
                    .into_iter()
                    .map(|option| {
                        let selected = move || vm.edit.with(|d| d.as_ref().map(|d| d.status) == Some(option));
                        view! { <option value=option.as_str() selected=selected>{option.as_str()}</option> }
                    })
                    .collect_view()}
            </select>
        </td>
        <td class="px-4 py-3">
            <textarea
                class="border rounded px-2 py-1 w-full min-h-[80px]"
                placeholder="Enter notes..."
                prop:value=move || vm.edit.with(|d| d.as_ref().map(|d| d.notes.clone()).unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.edit.update(|draft| {
                        if let Some(draft) = draft {
                            draft.notes = value;
                        }
                    });
                }
            ></textarea>
        </td>
        <td class="px-4 py-3 space-x-2">
            <button type="button" class="text-gray-600 hover:underline" on:click=move |_| vm.cancel_edit()>
                "Cancel"
            </button>
            <button
                type="button"
                class="text-green-700 hover:underline"
                on:click=move |_| spawn_local(async move { vm.save_edit().await })
            >
                "Save"
            </button>
        </td>
    }
    .into_view()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiClient, AttendanceRoster};
    use crate::pages::attendance::repository::AttendanceRepository;
    use crate::test_support::ssr::render_to_string;
    use std::rc::Rc;

    fn row(id: &str, scanned: bool) -> RosterRow {
        RosterRow {
            user_id: id.into(),
            user_name: format!("Student {}", id),
            user_email: Some(format!("student{}@campus.test", id)),
            rfid_card: Some(format!("RFID-{}", id)),
            assigned_at: "2025-02-01T09:15:00.000Z".into(),
            has_scanned: scanned,
            attendance: scanned.then(|| AttendanceRecord {
                id: format!("att-{}", id),
                user_id: Some(id.into()),
                schedule_id: Some("5".into()),
                status: AttendanceStatus::Present,
                notes: Some("on time".into()),
                scan_time: Some("2025-03-01T08:01:00.000Z".into()),
                is_late: false,
            }),
        }
    }

    fn render_roster(rows: Vec<RosterRow>) -> String {
        render_to_string(move || {
            let repo = AttendanceRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
                "http://127.0.0.1:9/api",
            )));
            let vm = AttendanceViewModel::new_with_repository(repo);
            vm.roster.set(Some(AttendanceRoster {
                attendance: rows,
                ..Default::default()
            }));
            view! { <RosterTable vm=vm /> }
        })
    }

    #[test]
    fn renders_scanned_rows_and_manual_entry_for_the_rest() {
        let html = render_roster(vec![row("1", true), row("2", false), row("3", false)]);
        assert_eq!(html.matches("manual-entry").count(), 2);
        assert_eq!(html.matches(">Delete<").count(), 1);
        assert!(html.contains("Student 3"));
        assert!(html.contains("student3@campus.test"));
        assert!(html.contains("2025-02-01 09:15"));
        assert!(html.contains("on time"));
        assert!(html.contains("Waiting for scan"));
    }

    #[test]
    fn keeps_server_order_and_offers_remove_on_every_row() {
        let html = render_roster(vec![row("1", false), row("2", true), row("3", false)]);
        let first = html.find("Student 1").expect("first row");
        let second = html.find("Student 2").expect("second row");
        let third = html.find("Student 3").expect("third row");
        assert!(first < second && second < third);
        assert_eq!(html.matches("remove-assignment").count(), 3);
    }

    #[test]
    fn late_scans_carry_a_late_suffix() {
        let mut late = row("4", true);
        if let Some(record) = late.attendance.as_mut() {
            record.status = AttendanceStatus::Late;
            record.is_late = true;
        }
        let html = render_roster(vec![late]);
        assert!(html.contains("LATE (Late)"));
    }

    #[test]
    fn empty_roster_shows_the_empty_state() {
        let html = render_roster(Vec::new());
        assert!(html.contains("No participants assigned"));
        assert!(!html.contains("<table"));
    }
}
