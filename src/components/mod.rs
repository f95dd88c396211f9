//! UI Components
//!
//! Login gate plus the employee form and list views.

mod delete_confirm_button;
mod employee_form;
mod employee_list;
mod login_form;

pub use delete_confirm_button::DeleteConfirmButton;
pub use employee_form::EmployeeForm;
pub use employee_list::EmployeeList;
pub use login_form::LoginForm;
