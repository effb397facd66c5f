pub mod employees;
pub mod metrics;
pub mod store;

pub use employees::{EmployeeError, EmployeeService};
pub use self::metrics::{get_metrics, init_metrics, record_employee_operation};
pub use store::{EmployeeStore, InMemoryEmployeeStore, MongoEmployeeStore, StoreError};
