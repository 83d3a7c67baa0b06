use crate::{
    api::{ChartBucket, ChartPeriod},
    components::layout::{ErrorMessage, LoadingSpinner},
    pages::dashboard::utils::{bar_height_percent, chart_max, WidgetState},
};
use leptos::*;

const SERIES: [(&str, &str); 4] = [
    ("Present", "bg-green-500"),
    ("Permission", "bg-blue-500"),
    ("Sick", "bg-yellow-500"),
    ("Absent", "bg-red-500"),
];

fn series_values(bucket: &ChartBucket) -> [u32; 4] {
    [bucket.present, bucket.permission, bucket.sick, bucket.absent]
}

#[component]
pub fn AttendanceChart(
    #[prop(into)] state: Signal<WidgetState<Vec<ChartBucket>>>,
    #[prop(into)] period: Signal<ChartPeriod>,
    on_period: Callback<ChartPeriod>,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg p-6 space-y-4">
            <div class="flex items-center justify-between">
                <h3 class="text-base font-semibold text-gray-900">"Attendance Overview"</h3>
                <div class="inline-flex rounded-lg border border-gray-200 overflow-hidden">
                    {ChartPeriod::ALL
                        .into_iter()
                        .map(|p| {
                            let class = move || {
                                if period.get() == p {
                                    "px-3 py-1 text-sm bg-orange-500 text-white"
                                } else {
                                    "px-3 py-1 text-sm text-gray-600 hover:bg-gray-100"
                                }
                            };
                            view! {
                                <button type="button" class=class on:click=move |_| on_period.call(p)>
                                    {p.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="flex gap-4 text-xs text-gray-600">
                {SERIES
                    .into_iter()
                    .map(|(label, color)| view! {
                        <span class="flex items-center gap-1">
                            <span class=format!("inline-block w-3 h-3 rounded {}", color)></span>
                            {label}
                        </span>
                    })
                    .collect_view()}
            </div>
            {move || state.with(|s| match (&s.data, s.loading, &s.error) {
                (Some(buckets), _, _) => chart_bars(buckets).into_view(),
                (None, true, _) => view! { <LoadingSpinner /> }.into_view(),
                (None, false, Some(err)) => view! { <ErrorMessage message=err.clone() /> }.into_view(),
                (None, false, None) => ().into_view(),
            })}
        </div>
    }
}

fn chart_bars(buckets: &[ChartBucket]) -> View {
    if buckets.is_empty() {
        return view! { <p class="text-sm text-gray-500">"No attendance data for this period."</p> }
            .into_view();
    }
    let max = chart_max(buckets);
    view! {
        <div class="flex items-end gap-3 h-48">
            {buckets
                .iter()
                .map(|bucket| {
                    let bars = series_values(bucket)
                        .into_iter()
                        .zip(SERIES)
                        .map(|(value, (label, color))| {
                            let style = format!("height: {}%", bar_height_percent(value, max));
                            view! {
                                <div
                                    class=format!("w-2 rounded-t {}", color)
                                    style=style
                                    title=format!("{}: {}", label, value)
                                ></div>
                            }
                        })
                        .collect_view();
                    view! {
                        <div class="flex-1 flex flex-col items-center h-full">
                            <div class="flex items-end gap-0.5 flex-1">{bars}</div>
                            <span class="mt-1 text-xs text-gray-500">{bucket.day.clone()}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_period_switch_and_buckets() {
        let html = render_to_string(|| {
            let state = create_rw_signal(WidgetState {
                data: Some(vec![ChartBucket {
                    day: "Wed".into(),
                    present: 4,
                    absent: 2,
                    ..Default::default()
                }]),
                loading: false,
                error: None,
            });
            let period = create_rw_signal(ChartPeriod::Weekly);
            view! { <AttendanceChart state=state period=period on_period=Callback::new(|_| ()) /> }
        });
        assert!(html.contains("Daily"));
        assert!(html.contains("Monthly"));
        assert!(html.contains("Wed"));
        assert!(html.contains("height: 50%"));
    }
}
