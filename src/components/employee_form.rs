//! Employee Form Component
//!
//! Create/edit form. While a record is selected the fields are seeded
//! from it and submit issues a PUT; with no selection the form starts
//! blank and submit issues a POST.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::AppContext;
use crate::models::{Employee, EmployeeDraft};

#[component]
pub fn EmployeeForm(
    #[prop(into)] employee_to_edit: Signal<Option<Employee>>,
    #[prop(into)] on_save_complete: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (position, set_position) = signal(String::new());
    let (office, set_office) = signal(String::new());
    let (salary, set_salary) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (msg, set_msg) = signal(String::new());

    // Seed or reset the fields whenever the selection changes.
    Effect::new(move |_| match employee_to_edit.get() {
        Some(emp) => {
            set_name.set(emp.name);
            set_position.set(emp.position);
            set_office.set(emp.office);
            set_salary.set(emp.salary);
        }
        None => {
            set_name.set(String::new());
            set_position.set(String::new());
            set_office.set(String::new());
            set_salary.set(String::new());
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        set_loading.set(true);
        set_msg.set(String::new());

        let draft = EmployeeDraft {
            name: name.get(),
            position: position.get(),
            office: office.get(),
            salary: salary.get(),
        };
        let editing = employee_to_edit.get();

        spawn_local(async move {
            let session = ctx.session.get_untracked();
            let result = match &editing {
                Some(emp) => api::update_employee(&session, &emp.id, &draft).await,
                None => api::create_employee(&session, &draft).await,
            };
            match result {
                Ok(()) => {
                    let confirmation = if editing.is_some() {
                        "Empleado actualizado"
                    } else {
                        "Empleado creado"
                    };
                    set_msg.set(confirmation.to_string());
                    if editing.is_none() {
                        // Creation keeps the selection at None, so the
                        // seeding effect will not fire; clear by hand.
                        set_name.set(String::new());
                        set_position.set(String::new());
                        set_office.set(String::new());
                        set_salary.set(String::new());
                    }
                    on_save_complete.run(());
                    ctx.reload();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[EmployeeForm] {err}").into());
                    set_msg.set(err.to_string());
                }
            }
            set_loading.set(false);
        });
    };

    let field = move |placeholder: &'static str,
                      input_type: &'static str,
                      value: ReadSignal<String>,
                      set_value: WriteSignal<String>| {
        view! {
            <div class="form-row">
                <input
                    type=input_type
                    placeholder=placeholder
                    required=true
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_value.set(input.value());
                    }
                />
            </div>
        }
    };

    view! {
        <div class="employee-form">
            <h2>
                {move || {
                    if employee_to_edit.get().is_some() {
                        "Editar Empleado"
                    } else {
                        "Agregar Empleado"
                    }
                }}
            </h2>
            <form on:submit=submit>
                {field("Nombre", "text", name, set_name)}
                {field("Posición", "text", position, set_position)}
                {field("Oficina", "text", office, set_office)}
                {field("Salario", "number", salary, set_salary)}

                <button type="submit" disabled=move || loading.get()>
                    {move || {
                        if loading.get() {
                            "Guardando..."
                        } else if employee_to_edit.get().is_some() {
                            "Actualizar"
                        } else {
                            "Guardar"
                        }
                    }}
                </button>

                <Show when=move || !msg.get().is_empty()>
                    <p class="status-msg">{move || msg.get()}</p>
                </Show>
            </form>
        </div>
    }
}
