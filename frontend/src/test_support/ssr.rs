use leptos::*;

/// Resources stay idle while a page renders on the host; the flag is
/// restored even if the view panics mid-render.
struct IdleResources;

impl IdleResources {
    fn hold() -> Self {
        leptos_reactive::suppress_resource_load(true);
        IdleResources
    }
}

impl Drop for IdleResources {
    fn drop(&mut self) {
        leptos_reactive::suppress_resource_load(false);
    }
}

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let _idle = IdleResources::hold();
    with_runtime(|| view().into_view().render_to_string().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_after_a_panicking_render() {
        let failed = std::panic::catch_unwind(|| {
            render_to_string(|| -> View { panic!("render failed") })
        });
        assert!(failed.is_err());

        let html = render_to_string(|| view! { <p>"Roster ready"</p> });
        assert!(html.contains("Roster ready"));
    }

    #[test]
    fn with_runtime_returns_the_closure_value() {
        let count = with_runtime(|| {
            let scans = create_rw_signal(2);
            scans.update(|n| *n += 1);
            scans.get_untracked()
        });
        assert_eq!(count, 3);
    }
}
