use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Employee fields before the store has assigned an id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDraft {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
}

/// A persisted employee, as stored in the `employees` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: Option<String>,
    pub designation: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
}

impl Employee {
    pub fn from_draft(id: ObjectId, draft: EmployeeDraft) -> Self {
        Self {
            id,
            name: draft.name,
            designation: draft.designation,
            department: draft.department,
            salary: draft.salary,
        }
    }
}
