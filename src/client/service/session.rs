use std::{cell::RefCell, rc::Rc};

use dioxus_logger::tracing;

/// Persistence for the bearer token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Keeps the token for the lifetime of the process only.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// Browser `localStorage` under [`LocalTokenStore::KEY`].
#[cfg(target_arch = "wasm32")]
pub struct LocalTokenStore;

#[cfg(target_arch = "wasm32")]
impl LocalTokenStore {
    pub const KEY: &'static str = "meetmap.token";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(Self::KEY).ok().flatten()
    }

    fn save(&self, token: &str) {
        match Self::storage() {
            Some(storage) => {
                report_storage_error("persist", storage.set_item(Self::KEY, token));
            }
            None => tracing::warn!("Local storage unavailable, session will not persist"),
        }
    }

    fn clear(&self) {
        match Self::storage() {
            Some(storage) => {
                report_storage_error("remove", storage.remove_item(Self::KEY));
            }
            None => tracing::warn!("Local storage unavailable, stored session was not removed"),
        }
    }
}

/// Logs a failed storage write. Returns whether the write succeeded.
///
/// A failed removal leaves the old token behind for the next page load.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn report_storage_error<E: std::fmt::Debug>(action: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(action, "Failed to {} session token: {:?}", action, err);
            false
        }
    }
}

/// Authentication state passed to every service call.
///
/// Cloning is cheap and every clone observes the same token.
#[derive(Clone)]
pub struct Session {
    token: Rc<RefCell<Option<String>>>,
    store: Rc<dyn TokenStore>,
}

impl Session {
    /// Restores the token previously saved in `store`.
    pub fn new(store: impl TokenStore + 'static) -> Self {
        let token = store.load();

        Self {
            token: Rc::new(RefCell::new(token)),
            store: Rc::new(store),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStore::default())
    }

    /// Session backed by the platform's persistent storage.
    pub fn persistent() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(LocalTokenStore)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::in_memory()
        }
    }

    pub fn login(&self, token: &str) {
        tracing::info!("Session started");
        self.store.save(token);
        *self.token.borrow_mut() = Some(token.to_string());
    }

    pub fn logout(&self) {
        tracing::info!("Session ended");
        self.store.clear();
        *self.token.borrow_mut() = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.borrow().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stores into a shared cell so the test can observe persistence.
    struct SharedStore(Rc<RefCell<Option<String>>>);

    impl TokenStore for SharedStore {
        fn load(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn save(&self, token: &str) {
            *self.0.borrow_mut() = Some(token.to_string());
        }

        fn clear(&self) {
            *self.0.borrow_mut() = None;
        }
    }

    /// Expect a saved token to be restored by a new session
    #[test]
    fn restores_persisted_token() {
        let session = Session::new(MemoryTokenStore::with_token("abc"));

        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("abc"));
    }

    /// Expect login and logout to update every clone and the store
    #[test]
    fn login_and_logout_are_shared() {
        let persisted = Rc::new(RefCell::new(None));
        let session = Session::new(SharedStore(persisted.clone()));
        let clone = session.clone();

        session.login("token-1");
        assert_eq!(clone.token().as_deref(), Some("token-1"));
        assert_eq!(persisted.borrow().as_deref(), Some("token-1"));

        clone.logout();
        assert!(!session.is_authenticated());
        assert!(persisted.borrow().is_none());
    }

    /// Expect storage failures to be reported instead of swallowed
    #[test]
    fn reports_storage_failures() {
        assert!(report_storage_error::<String>("remove", Ok(())));
        assert!(!report_storage_error("remove", Err("QuotaExceededError".to_string())));
    }
}
