//! Browser-held session token and the shared handling of failed API calls.

use std::rc::Rc;

use leptos::*;
use leptos_use::{storage::use_local_storage, utils::FromToStringCodec};

use super::backend::{into_api_error, CallError};
use super::toast::{use_toasts, Toasts};

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

pub const LOGIN_PATH: &str = "/login";

pub fn has_token(token: &str) -> bool {
    !token.trim().is_empty()
}

/// A 401 sends the user to the login screen unless they are already there.
pub fn should_redirect_to_login(pathname: &str) -> bool {
    !pathname.contains(LOGIN_PATH)
}

#[derive(Clone, Copy)]
pub struct Session {
    token: Signal<String>,
    set_token: WriteSignal<String>,
    remove: StoredValue<Rc<dyn Fn()>>,
}

impl Session {
    fn from_local_storage() -> Self {
        let (token, set_token, remove) = use_local_storage::<String, FromToStringCodec>(TOKEN_KEY);
        let remove: Rc<dyn Fn()> = Rc::new(remove);

        Self {
            token,
            set_token,
            remove: store_value(remove),
        }
    }

    /// Current token, without subscribing.
    pub fn token(&self) -> String {
        self.token.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.with(|token| has_token(token))
    }

    pub fn store(&self, token: String) {
        self.set_token.set(token);
    }

    pub fn clear(&self) {
        self.set_token.set(String::new());
        self.remove.with_value(|remove| remove());
    }
}

pub fn provide_session() -> Session {
    let session = Session::from_local_storage();
    provide_context(session);
    session
}

pub fn use_session() -> Session {
    expect_context::<Session>()
}

/// What pages need to call the backend: the token to send, and somewhere to
/// report failures. Grab it while rendering; contexts are gone after an await.
#[derive(Clone, Copy)]
pub struct ApiContext {
    pub session: Session,
    pub toasts: Toasts,
}

impl ApiContext {
    pub fn token(&self) -> String {
        self.session.token()
    }

    /// Toasts the failure. A 401 also ends the session and leaves for `/login`.
    pub fn report(&self, err: CallError) {
        let err = into_api_error(err);
        logging::error!("api call failed: {err:?}");
        self.toasts.error(err.user_message());

        if err.is_unauthorized() {
            self.session.clear();
            redirect_to_login();
        }
    }
}

pub fn use_api() -> ApiContext {
    ApiContext {
        session: use_session(),
        toasts: use_toasts(),
    }
}

fn redirect_to_login() {
    #[cfg(feature = "hydrate")]
    {
        let location = window().location();
        let pathname = location.pathname().unwrap_or_default();
        if should_redirect_to_login(&pathname) {
            let _ = location.set_href(LOGIN_PATH);
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;
