use crate::models::{Employee, EmployeeDraft};
use serde::{Deserialize, Serialize};

/// Body of `POST /employees`. `id` is accepted on the wire only so that a
/// client-supplied one can be detected and refused.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewEmployee {
    #[serde(default)]
    pub id: Option<String>,
    pub name: Option<String>,
    pub designation: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
}

impl NewEmployee {
    /// True when the payload names an id; empty strings count as absent.
    pub fn has_id(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

impl From<NewEmployee> for EmployeeDraft {
    fn from(payload: NewEmployee) -> Self {
        Self {
            name: payload.name,
            designation: payload.designation,
            department: payload.department,
            salary: payload.salary,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeeResponse {
    pub id: String,
    pub name: Option<String>,
    pub designation: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id.to_hex(),
            name: employee.name,
            designation: employee.designation,
            department: employee.department,
            salary: employee.salary,
        }
    }
}
