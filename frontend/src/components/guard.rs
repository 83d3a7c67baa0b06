use crate::{components::layout::LoadingSpinner, state::auth::use_auth, utils::navigation};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    let is_expired = create_memo(move |_| auth.get().expired);
    create_effect(move |_| {
        if should_redirect(is_authenticated.get(), is_loading.get(), is_expired.get()) {
            navigation::redirect("/login");
        }
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

/// An expired session waits for the dialog's Logout button instead.
fn should_redirect(is_authenticated: bool, is_loading: bool, is_expired: bool) -> bool {
    !is_authenticated && !is_loading && !is_expired
}

/// Sends a signed-in visitor of `/login` straight to the dashboard.
#[component]
pub fn RedirectIfAuthenticated(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    create_effect(move |_| {
        let state = auth.get();
        if state.is_authenticated && !state.loading {
            navigation::redirect("/dashboard");
        }
    });
    view! { {children()} }
}

#[cfg(test)]
mod tests {
    use super::{should_redirect, should_render_children};

    #[test]
    fn guard_blocks_until_authenticated() {
        assert!(!should_render_children(false, true));
        assert!(!should_render_children(false, false));
        assert!(!should_render_children(true, true));
        assert!(should_render_children(true, false));
    }

    #[test]
    fn expired_session_is_not_redirected_silently() {
        assert!(should_redirect(false, false, false));
        assert!(!should_redirect(false, false, true));
        assert!(!should_redirect(false, true, false));
        assert!(!should_redirect(true, false, false));
    }
}
