use crate::api::Session;

pub const SESSION_KEY: &str = "espoint_session";

#[cfg(target_arch = "wasm32")]
mod backend {
    use web_sys::{Storage, Window};

    pub fn window() -> Result<Window, String> {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }

    pub fn local_storage() -> Result<Storage, String> {
        window()?
            .local_storage()
            .map_err(|_| "No localStorage".to_string())?
            .ok_or_else(|| "No localStorage".to_string())
    }

    pub fn get_item(key: &str) -> Result<Option<String>, String> {
        local_storage()?
            .get_item(key)
            .map_err(|_| format!("Failed to read {}", key))
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| format!("Failed to store {}", key))
    }

    pub fn remove_item(key: &str) -> Result<(), String> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| format!("Failed to remove {}", key))
    }
}

// Host builds have no DOM; each test thread gets its own store.
#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get_item(key: &str) -> Result<Option<String>, String> {
        Ok(STORE.with(|store| store.borrow().get(key).cloned()))
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), String> {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_string(), value.to_string());
        });
        Ok(())
    }

    pub fn remove_item(key: &str) -> Result<(), String> {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
        Ok(())
    }
}

pub use backend::{get_item, remove_item, set_item};

pub fn load_session() -> Option<Session> {
    let raw = get_item(SESSION_KEY).ok().flatten()?;
    match serde_json::from_str::<Session>(&raw) {
        Ok(session) => Some(session),
        Err(err) => {
            log::warn!("Discarding unreadable session blob: {}", err);
            let _ = remove_item(SESSION_KEY);
            None
        }
    }
}

pub fn save_session(session: &Session) -> Result<(), String> {
    let raw = serde_json::to_string(session).map_err(|_| "Failed to serialize session")?;
    set_item(SESSION_KEY, &raw)
}

pub fn clear_session() {
    let _ = remove_item(SESSION_KEY);
}

pub fn session_token() -> Option<String> {
    load_session()
        .map(|session| session.token)
        .filter(|token| !token.trim().is_empty())
}
