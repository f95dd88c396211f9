//! Login Form Component
//!
//! Token-based login gate shown while the session is unauthenticated.
//! Sends `{correo, password}` to the backend and stores the returned
//! token in the session on success.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::AppContext;

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (correo, set_correo) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (msg, set_msg) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        set_loading.set(true);
        set_msg.set(String::new());

        let correo_value = correo.get();
        let password_value = password.get();
        spawn_local(async move {
            match api::login(&correo_value, &password_value).await {
                Ok(success) => {
                    set_loading.set(false);
                    set_msg.set("Inicio de sesión correcto".to_string());
                    // Flips the session flag exactly once; App swaps to
                    // the main screen and this form unmounts.
                    ctx.login(success.token, success.usuario);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[Login] {err}").into());
                    set_msg.set(err.to_string());
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-screen">
            <h1>"Gestión de Empleados - Login"</h1>
            <form class="login-form" on:submit=submit>
                <div class="form-row">
                    <label>"Correo"</label>
                    <input
                        type="email"
                        required=true
                        autofocus=true
                        prop:value=move || correo.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_correo.set(input.value());
                        }
                    />
                </div>

                <div class="form-row">
                    <label>"Contraseña"</label>
                    <input
                        type="password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_password.set(input.value());
                        }
                    />
                </div>

                <button type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Ingresando..." } else { "Ingresar" }}
                </button>

                <Show when=move || !msg.get().is_empty()>
                    <p class="status-msg">{move || msg.get()}</p>
                </Show>
            </form>
        </div>
    }
}
