use crate::{
    api::{ApiClient, ApiError, LoginRequest, Session, SessionUser},
    pages::login::repository::LoginRepository,
    utils::storage,
};
use leptos::*;
use std::rc::Rc;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub is_authenticated: bool,
}

impl AuthState {
    pub fn from_session(session: Option<Session>) -> Self {
        match session {
            Some(session) => Self {
                user: Some(session.user),
                is_authenticated: true,
            },
            None => Self::default(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated
            && self
                .user
                .as_ref()
                .map(|user| user.role.is_admin())
                .unwrap_or(false)
    }

    fn signed_out(&mut self) {
        self.user = None;
        self.is_authenticated = false;
    }
}

/// Reads the stored session once, synchronously, when the app mounts.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_signal(AuthState::from_session(storage::load_session()));
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
    let response = repo.login(request).await?;
    set_auth_state.update(|state| {
        state.user = Some(response.user);
        state.is_authenticated = true;
    });
    Ok(())
}

pub async fn logout(
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let result = repo.logout().await;
    set_auth_state.update(AuthState::signed_out);
    result
}

fn login_repository() -> LoginRepository {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    LoginRepository::new_with_client(Rc::new(api))
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = login_repository();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = login_repository();

    create_action(move |_: &()| {
        let repo = repo.clone();
        async move { logout(&repo, set_auth).await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MemberRole;

    fn user(role: MemberRole) -> SessionUser {
        SessionUser {
            id: "m1".into(),
            name: "Aina".into(),
            email: "aina@espoint.test".into(),
            role,
        }
    }

    #[test]
    fn auth_state_from_session_marks_authenticated() {
        let state = AuthState::from_session(Some(Session {
            token: "tok".into(),
            user: user(MemberRole::Admin),
        }));
        assert!(state.is_authenticated);
        assert!(state.is_admin());

        let regular = AuthState::from_session(Some(Session {
            token: "tok".into(),
            user: user(MemberRole::Regular),
        }));
        assert!(!regular.is_admin());
        assert_eq!(AuthState::from_session(None), AuthState::default());
    }
}
