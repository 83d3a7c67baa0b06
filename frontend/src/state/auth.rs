use crate::{
    api::{token, ApiClient, ApiError, LoginRequest, SessionUser},
    pages::login::repository::LoginRepository,
    utils::{navigation, time},
};
use leptos::*;
use std::rc::Rc;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

/// Session as the UI sees it. `user` comes from the token or login response
/// and is a display hint only; the server authorises every request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub is_authenticated: bool,
    pub loading: bool,
    pub expired: bool,
}

impl AuthState {
    pub fn from_token(token: Option<&str>, now_secs: i64) -> Self {
        let Some(token) = token else {
            return Self::default();
        };
        let user = token::session_user(token);
        if token::is_expired(token, now_secs) {
            Self {
                user,
                is_authenticated: false,
                loading: false,
                expired: true,
            }
        } else {
            Self {
                user,
                is_authenticated: true,
                loading: false,
                expired: false,
            }
        }
    }

    /// Applied on any 401. Only a live session can expire.
    pub fn mark_expired(&mut self) {
        if self.is_authenticated {
            self.expired = true;
        }
        self.user = None;
        self.is_authenticated = false;
        self.loading = false;
    }
}

fn create_auth_context(api: &ApiClient) -> AuthContext {
    let initial = AuthState::from_token(token::load().as_deref(), time::now_utc().timestamp());
    if initial.expired {
        log::info!("stored session has expired");
    }
    let (auth_state, set_auth_state) = create_signal(initial);

    api.on_unauthorized(move || {
        set_auth_state.update(AuthState::mark_expired);
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let ctx = create_auth_context(&api);
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(&request).await {
        Ok(response) => {
            set_auth_state.update(|state| {
                state.user = response.user;
                state.is_authenticated = true;
                state.loading = false;
                state.expired = false;
            });
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

/// Clears the session even if the server call fails.
pub async fn logout(repo: &LoginRepository, set_auth_state: WriteSignal<AuthState>) {
    if let Err(err) = repo.logout().await {
        log::warn!("logout failed server-side: {}", err);
    }
    set_auth_state.set(AuthState::default());
}

fn use_login_repository() -> LoginRepository {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    LoginRepository::new_with_client(Rc::new(api))
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = use_login_repository();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), ()> {
    let (_auth, set_auth) = use_auth();
    let repo = use_login_repository();

    create_action(move |_: &()| {
        let repo = repo.clone();
        async move {
            logout(&repo, set_auth).await;
            navigation::redirect("/login");
        }
    })
}
