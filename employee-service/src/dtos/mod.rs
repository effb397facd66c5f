pub mod employees;

pub use employees::{EmployeeResponse, NewEmployee};
