//! Application Context
//!
//! The session and the list-reload trigger, injected via the Leptos
//! context API into every component that talks to the backend.

use leptos::prelude::*;
use serde_json::Value;

use crate::session::Session;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current session - read
    pub session: ReadSignal<Session>,
    set_session: WriteSignal<Session>,
    /// Trigger to reload the employee list - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        session: (ReadSignal<Session>, WriteSignal<Session>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            session: session.0,
            set_session: session.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a reload of the employee list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Persist a fresh session after a successful login and flip the
    /// authenticated flag.
    pub fn login(&self, token: String, usuario: Option<Value>) {
        let session = Session::authenticated(token, usuario);
        session.persist();
        self.set_session.set(session);
    }

    /// Drop credentials and return to the login screen.
    pub fn logout(&self) {
        Session::clear_storage();
        self.set_session.set(Session::default());
    }
}
