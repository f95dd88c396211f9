//! Employee List Component
//!
//! Table of employees with per-row edit and delete actions. Reloads from
//! the backend on mount and whenever the shared reload trigger fires.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::Employee;

#[component]
pub fn EmployeeList(#[prop(into)] on_edit: Callback<Employee>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (employees, set_employees) = signal(Vec::<Employee>::new());
    let (loading, set_loading) = signal(false);
    let (msg, set_msg) = signal(String::new());

    // Load on mount and whenever the reload trigger fires.
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let session = ctx.session.get_untracked();
        set_loading.set(true);
        spawn_local(async move {
            let loaded = api::list_employees(&session).await;
            web_sys::console::log_1(
                &format!("[EmployeeList] Loaded {} empleados", loaded.len()).into(),
            );
            set_employees.set(loaded);
            set_loading.set(false);
        });
    });

    view! {
        <div class="employee-list">
            <h2>"Lista de Empleados"</h2>

            <Show when=move || !msg.get().is_empty()>
                <p class="status-msg">{move || msg.get()}</p>
            </Show>

            <Show when=move || loading.get()>
                <p class="loading">"Cargando..."</p>
            </Show>

            <Show when=move || !loading.get() && employees.get().is_empty()>
                <p class="empty-state">"No hay empleados registrados."</p>
            </Show>

            <Show when=move || !loading.get() && !employees.get().is_empty()>
                <table class="employee-table">
                    <thead>
                        <tr>
                            <th>"Nombre"</th>
                            <th>"Posición"</th>
                            <th>"Oficina"</th>
                            <th>"Salario"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || employees.get()
                            key=|emp| emp.id.clone()
                            children=move |emp: Employee| {
                                let edit_emp = emp.clone();
                                let delete_id = emp.id.clone();
                                view! {
                                    <tr>
                                        <td>{emp.name.clone()}</td>
                                        <td>{emp.position.clone()}</td>
                                        <td>{emp.office.clone()}</td>
                                        <td>{emp.salary.clone()}</td>
                                        <td>
                                            <button
                                                class="edit-btn"
                                                on:click=move |_| on_edit.run(edit_emp.clone())
                                            >
                                                "Editar"
                                            </button>
                                            <DeleteConfirmButton
                                                button_class="delete-btn"
                                                on_confirm=Callback::new(move |()| {
                                                    let id = delete_id.clone();
                                                    let session = ctx.session.get_untracked();
                                                    spawn_local(async move {
                                                        match api::delete_employee(&session, &id).await {
                                                            Ok(()) => {
                                                                set_msg.set("Empleado eliminado".to_string());
                                                                ctx.reload();
                                                            }
                                                            Err(err) => {
                                                                web_sys::console::error_1(
                                                                    &format!("[EmployeeList] delete {id}: {err}").into(),
                                                                );
                                                                set_msg.set(err.to_string());
                                                            }
                                                        }
                                                    });
                                                })
                                            />
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
