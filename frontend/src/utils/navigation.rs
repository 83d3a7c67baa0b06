/// Full-page navigation, matching how guards and session handling leave the
/// current view. No-op off the browser.
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            if location.pathname().ok().as_deref() == Some(path) {
                return;
            }
            let _ = location.set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::debug!("redirect to {} skipped outside the browser", path);
    }
}
