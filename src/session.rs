//! Session Store
//!
//! Bearer-token session persisted in `localStorage` so a login survives
//! page reloads. The backend may send an optional user profile alongside
//! the token; it is stored under its own key.

use serde_json::Value;

const TOKEN_KEY: &str = "token";
const USUARIO_KEY: &str = "usuario";

/// Client-held authentication state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
    usuario: Option<Value>,
}

impl Session {
    /// Rebuild the session from persisted storage. Missing or unavailable
    /// storage yields an unauthenticated session.
    pub fn load() -> Self {
        let Some(storage) = local_storage() else {
            return Self::default();
        };
        let token = storage
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty());
        let usuario = storage
            .get_item(USUARIO_KEY)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str(&raw).ok());
        Self { token, usuario }
    }

    /// Session for a freshly received token.
    pub fn authenticated(token: String, usuario: Option<Value>) -> Self {
        Self {
            token: Some(token),
            usuario,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.bearer_token().is_some()
    }

    /// Token to place in the `Authorization: Bearer` header, if any.
    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// Name to greet the user with, when the stored profile carries one.
    /// Profile shape varies by backend build, so a few field names are
    /// tried in order.
    pub fn display_name(&self) -> Option<String> {
        let usuario = self.usuario.as_ref()?;
        ["nombre", "name", "correo"]
            .iter()
            .filter_map(|key| usuario.get(*key).and_then(Value::as_str))
            .find(|name| !name.is_empty())
            .map(str::to_owned)
    }

    /// Write the token (and profile, when present) to storage. Storage
    /// errors are ignored; the in-memory session stays authoritative for
    /// the current page.
    pub fn persist(&self) {
        let Some(storage) = local_storage() else {
            return;
        };
        if let Some(token) = &self.token {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
        if let Some(usuario) = &self.usuario {
            if let Ok(raw) = serde_json::to_string(usuario) {
                let _ = storage.set_item(USUARIO_KEY, &raw);
            }
        }
    }

    /// Remove persisted credentials (logout path).
    pub fn clear_storage() {
        let Some(storage) = local_storage() else {
            return;
        };
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USUARIO_KEY);
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_session_is_unauthenticated() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.bearer_token(), None);
    }

    #[test]
    fn token_authenticates_and_feeds_the_bearer_header() {
        let session = Session::authenticated("abc123".into(), None);
        assert!(session.is_authenticated());
        assert_eq!(session.bearer_token(), Some("abc123"));
    }

    #[test]
    fn empty_token_counts_as_unauthenticated() {
        let session = Session::authenticated(String::new(), None);
        assert!(!session.is_authenticated());
        assert_eq!(session.bearer_token(), None);
    }

    #[test]
    fn display_name_tries_profile_fields_in_order() {
        let session = Session::authenticated(
            "abc".into(),
            Some(json!({ "nombre": "Ana", "correo": "a@b.com" })),
        );
        assert_eq!(session.display_name(), Some("Ana".to_string()));

        let correo_only =
            Session::authenticated("abc".into(), Some(json!({ "correo": "a@b.com" })));
        assert_eq!(correo_only.display_name(), Some("a@b.com".to_string()));

        let no_profile = Session::authenticated("abc".into(), None);
        assert_eq!(no_profile.display_name(), None);
    }
}
