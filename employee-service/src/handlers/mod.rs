pub mod employees;
pub mod greeting;
pub mod health;

pub use employees::{create_employee, delete_employee, get_employee, list_employees};
pub use greeting::{hello, ping};
pub use health::{health_check, metrics_endpoint, readiness_check};
