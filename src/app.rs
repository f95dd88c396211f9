//! Employee Admin App
//!
//! Main application component. Owns the session and the current
//! selection, and decides between the login gate and the form + list
//! screen.

use leptos::prelude::*;

use crate::components::{EmployeeForm, EmployeeList, LoginForm};
use crate::context::AppContext;
use crate::models::Employee;
use crate::session::Session;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (session, set_session) = signal(Session::load());
    let (selected_employee, set_selected_employee) = signal::<Option<Employee>>(None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    let ctx = AppContext::new(
        (session, set_session),
        (reload_trigger, set_reload_trigger),
    );
    provide_context(ctx);

    // List row clicked "Editar": snapshot the record, form switches to
    // edit mode.
    let handle_edit = Callback::new(move |employee: Employee| {
        set_selected_employee.set(Some(employee));
    });

    // Save finished: drop the selection, form reverts to create mode.
    let handle_save_complete = Callback::new(move |()| {
        set_selected_employee.set(None);
    });

    view! {
        <div class="app-layout">
            <Show
                when=move || session.get().is_authenticated()
                fallback=|| view! { <LoginForm /> }
            >
                <header class="app-header">
                    <h1>"Gestión de Empleados"</h1>
                    {move || {
                        session
                            .get()
                            .display_name()
                            .map(|name| view! { <span class="user-name">{name}</span> })
                    }}
                    <button
                        class="logout-btn"
                        on:click=move |_| {
                            set_selected_employee.set(None);
                            ctx.logout();
                        }
                    >
                        "Cerrar sesión"
                    </button>
                </header>

                <EmployeeForm
                    employee_to_edit=selected_employee
                    on_save_complete=handle_save_complete
                />

                <hr />

                <EmployeeList on_edit=handle_edit />
            </Show>
        </div>
    }
}
