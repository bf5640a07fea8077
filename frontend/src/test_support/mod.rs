#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{MemberRole, Service, Session, SessionUser};
    use crate::state::auth::{AuthContext, AuthState};
    use crate::utils::storage;
    use leptos::*;

    pub fn admin_user() -> SessionUser {
        SessionUser {
            id: "m-admin".into(),
            name: "Admin User".into(),
            email: "admin@espoint.test".into(),
            role: MemberRole::Admin,
        }
    }

    pub fn regular_user() -> SessionUser {
        SessionUser {
            id: "m-regular".into(),
            name: "Regular User".into(),
            email: "member@espoint.test".into(),
            role: MemberRole::Regular,
        }
    }

    pub fn provide_auth(user: Option<SessionUser>) -> AuthContext {
        let is_authenticated = user.is_some();
        let ctx = create_signal(AuthState {
            user,
            is_authenticated,
        });
        provide_context::<AuthContext>(ctx);
        ctx
    }

    pub fn provide_signed_out() -> AuthContext {
        provide_auth(None)
    }

    /// Stores an admin session so authorized requests carry a bearer token.
    pub fn sign_in() {
        let session = Session {
            token: "test-token".into(),
            user: admin_user(),
        };
        storage::save_session(&session).unwrap();
    }

    pub fn service(id: &str, name: &str) -> Service {
        Service {
            id: id.into(),
            name: name.into(),
            description: None,
            category: None,
            price: 100.0,
            capacity: None,
            is_active: true,
            image_url: None,
        }
    }
}
