//! Backend API Client
//!
//! Every request against the employee backend: login plus employee CRUD.
//! The backend is loose about field names (`token` vs `tokenJwt` vs `jwt`,
//! `error` vs `msg`, `_id` vs `id`); all of that guessing is normalized
//! here and nowhere else.

use std::future::Future;

use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;
use thiserror::Error;

use crate::models::{Employee, EmployeeDraft};
use crate::session::Session;

/// Backend host. Fixed for this deployment, no runtime configuration.
pub const API_BASE: &str = "http://localhost:3000";

/// Milliseconds before an in-flight request is abandoned.
const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// Canonical outcome of any backend exchange.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Transport-level failure (server unreachable, fetch rejected).
    #[error("Error de conexión con el servidor")]
    Connection,
    /// The request outlived [`REQUEST_TIMEOUT_MS`].
    #[error("El servidor no respondió a tiempo")]
    Timeout,
    /// Non-2xx response; carries the message extracted from the body.
    #[error("{0}")]
    Backend(String),
    /// 2xx login response with no token under any accepted field name.
    #[error("No se recibió token del servidor")]
    NoToken,
}

/// Normalized successful login payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginSuccess {
    pub token: String,
    pub usuario: Option<Value>,
}

pub fn login_url() -> String {
    format!("{API_BASE}/api/usuarios/login")
}

pub fn empleados_url(id: Option<&str>) -> String {
    match id {
        Some(id) => format!("{API_BASE}/api/empleados/{id}"),
        None => format!("{API_BASE}/api/empleados"),
    }
}

/// POST credentials and normalize the response into a [`LoginSuccess`].
pub async fn login(correo: &str, password: &str) -> Result<LoginSuccess, ApiError> {
    let request = reqwest::Client::new()
        .post(login_url())
        .json(&serde_json::json!({ "correo": correo, "password": password }))
        .send();
    let response = with_timeout(request).await?;
    let status = response.status();
    let body: Value = with_timeout(response.json()).await.unwrap_or(Value::Null);

    if !status.is_success() {
        return Err(ApiError::Backend(message_from(
            &body,
            &["error", "msg"],
            "Credenciales incorrectas",
        )));
    }

    let token = extract_token(&body).ok_or(ApiError::NoToken)?;
    Ok(LoginSuccess {
        token,
        usuario: extract_profile(&body),
    })
}

/// Fetch all employees. Failures degrade to an empty list; the error is
/// logged to the console but never surfaced (the list view just shows its
/// empty state).
pub async fn list_employees(session: &Session) -> Vec<Employee> {
    let request = authorized(reqwest::Client::new().get(empleados_url(None)), session).send();
    let response = match with_timeout(request).await {
        Ok(response) => response,
        Err(err) => {
            web_sys::console::error_1(&format!("[api] error fetching empleados: {err}").into());
            return Vec::new();
        }
    };

    if !response.status().is_success() {
        let body: Value = with_timeout(response.json()).await.unwrap_or(Value::Null);
        web_sys::console::error_1(&format!("[api] empleados request rejected: {body}").into());
        return Vec::new();
    }

    match with_timeout(response.json()).await {
        Ok(body) => parse_employee_list(body),
        Err(_) => Vec::new(),
    }
}

/// POST a new employee. On success the caller clears the draft and
/// reloads the list.
pub async fn create_employee(session: &Session, draft: &EmployeeDraft) -> Result<(), ApiError> {
    save_employee(session, None, draft).await
}

/// PUT an existing employee. On success the caller clears the selection.
pub async fn update_employee(
    session: &Session,
    id: &str,
    draft: &EmployeeDraft,
) -> Result<(), ApiError> {
    save_employee(session, Some(id), draft).await
}

async fn save_employee(
    session: &Session,
    id: Option<&str>,
    draft: &EmployeeDraft,
) -> Result<(), ApiError> {
    let client = reqwest::Client::new();
    let builder = match id {
        Some(id) => client.put(empleados_url(Some(id))),
        None => client.post(empleados_url(None)),
    };
    let request = authorized(builder, session).json(draft).send();
    let response = with_timeout(request).await?;

    if !response.status().is_success() {
        let body: Value = with_timeout(response.json()).await.unwrap_or(Value::Null);
        return Err(ApiError::Backend(message_from(
            &body,
            &["error", "msg"],
            "Error al guardar empleado",
        )));
    }
    Ok(())
}

/// DELETE one employee. The caller is responsible for having confirmed
/// the action with the user before reaching this point.
pub async fn delete_employee(session: &Session, id: &str) -> Result<(), ApiError> {
    let request = authorized(reqwest::Client::new().delete(empleados_url(Some(id))), session).send();
    let response = with_timeout(request).await?;

    if !response.status().is_success() {
        let body: Value = with_timeout(response.json()).await.unwrap_or(Value::Null);
        return Err(ApiError::Backend(message_from(
            &body,
            &["error"],
            "Error al eliminar",
        )));
    }
    Ok(())
}

fn authorized(builder: reqwest::RequestBuilder, session: &Session) -> reqwest::RequestBuilder {
    let builder = builder.header(reqwest::header::CONTENT_TYPE, "application/json");
    match session.bearer_token() {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

/// Race a request future against the fixed timeout so no control is left
/// in its loading state forever.
async fn with_timeout<F, T>(future: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, reqwest::Error>>,
{
    match select(Box::pin(future), TimeoutFuture::new(REQUEST_TIMEOUT_MS)).await {
        Either::Left((result, _)) => result.map_err(|_| ApiError::Connection),
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}

/// The token may come back under any of three field names depending on
/// the backend build. Empty and non-string values are skipped.
pub fn extract_token(body: &Value) -> Option<String> {
    ["token", "tokenJwt", "jwt"]
        .iter()
        .filter_map(|key| body.get(*key).and_then(Value::as_str))
        .find(|token| !token.is_empty())
        .map(str::to_owned)
}

/// Optional user profile sent alongside the token.
pub fn extract_profile(body: &Value) -> Option<Value> {
    ["usuario", "user"]
        .iter()
        .filter_map(|key| body.get(*key))
        .find(|profile| !profile.is_null())
        .cloned()
}

/// Human-readable message from an error body, tried under `keys` in
/// order, falling back to `fallback`.
pub fn message_from(body: &Value, keys: &[&str], fallback: &str) -> String {
    keys.iter()
        .filter_map(|key| body.get(*key).and_then(Value::as_str))
        .find(|message| !message.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| fallback.to_string())
}

/// A well-behaved backend returns a JSON array; anything else renders as
/// an empty list rather than an error state. Rows that fail to
/// deserialize are skipped.
pub fn parse_employee_list(body: Value) -> Vec<Employee> {
    match body {
        Value::Array(rows) => rows
            .into_iter()
            .filter_map(|row| serde_json::from_value(row).ok())
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn token_accepted_under_all_three_field_names() {
        for key in ["token", "tokenJwt", "jwt"] {
            let body = json!({ key: "abc123" });
            assert_eq!(extract_token(&body), Some("abc123".to_string()));
        }
    }

    #[test]
    fn token_prefers_the_first_populated_field() {
        let body = json!({ "token": "", "jwt": "fallback" });
        assert_eq!(extract_token(&body), Some("fallback".to_string()));
    }

    #[test]
    fn missing_or_non_string_token_yields_none() {
        assert_eq!(extract_token(&json!({ "ok": true })), None);
        assert_eq!(extract_token(&json!({ "token": 42 })), None);
        assert_eq!(extract_token(&Value::Null), None);
    }

    #[test]
    fn profile_found_under_either_field_name() {
        let body = json!({ "token": "t", "user": { "nombre": "Ana" } });
        assert_eq!(extract_profile(&body), Some(json!({ "nombre": "Ana" })));
        assert_eq!(extract_profile(&json!({ "token": "t" })), None);
    }

    #[test]
    fn error_message_prefers_error_then_msg_then_fallback() {
        let both = json!({ "error": "duplicado", "msg": "otro" });
        assert_eq!(message_from(&both, &["error", "msg"], "f"), "duplicado");

        let msg_only = json!({ "msg": "sin permiso" });
        assert_eq!(message_from(&msg_only, &["error", "msg"], "f"), "sin permiso");

        assert_eq!(message_from(&Value::Null, &["error", "msg"], "f"), "f");
    }

    #[test]
    fn delete_errors_only_read_the_error_field() {
        let body = json!({ "msg": "ignored" });
        assert_eq!(message_from(&body, &["error"], "Error al eliminar"), "Error al eliminar");
    }

    #[test]
    fn list_parses_rows_in_response_order() {
        let body = json!([
            { "_id": "1", "name": "Ana", "position": "Dev", "office": "HQ", "salary": "1000" },
            { "id": "2", "name": "Luis", "position": "QA", "office": "Norte", "salary": 2500 }
        ]);
        let rows = parse_employee_list(body);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Ana");
        assert_eq!(rows[1].id, "2");
        assert_eq!(rows[1].salary, "2500");
    }

    #[test]
    fn non_array_list_body_becomes_empty() {
        assert!(parse_employee_list(json!({ "error": "no auth" })).is_empty());
        assert!(parse_employee_list(Value::Null).is_empty());
    }

    #[test]
    fn rows_without_an_id_are_skipped() {
        let body = json!([
            { "name": "sin id" },
            { "_id": "9", "name": "ok" }
        ]);
        let rows = parse_employee_list(body);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "9");
    }

    #[test]
    fn urls_target_the_collection_and_single_records() {
        assert_eq!(empleados_url(None), "http://localhost:3000/api/empleados");
        assert_eq!(
            empleados_url(Some("42")),
            "http://localhost:3000/api/empleados/42"
        );
        assert_eq!(login_url(), "http://localhost:3000/api/usuarios/login");
    }
}
