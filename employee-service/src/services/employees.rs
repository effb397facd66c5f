use crate::dtos::NewEmployee;
use crate::models::Employee;
use crate::services::store::{EmployeeStore, StoreError};
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmployeeError {
    #[error("Employee id is assigned by the store and must not be supplied")]
    IdNotAllowed,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<EmployeeError> for AppError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::IdNotAllowed => {
                AppError::BadRequest(anyhow::anyhow!(EmployeeError::IdNotAllowed.to_string()))
            }
            EmployeeError::Store(e) => AppError::from(e),
        }
    }
}

/// Thin layer between the HTTP handlers and the configured store.
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    pub async fn get_all_employees(&self) -> Result<Vec<Employee>, EmployeeError> {
        Ok(self.store.find_all().await?)
    }

    /// Create a new employee. Saves never overwrite: a payload that already
    /// carries an id is refused.
    pub async fn save_employee(&self, payload: NewEmployee) -> Result<Employee, EmployeeError> {
        if payload.has_id() {
            return Err(EmployeeError::IdNotAllowed);
        }
        Ok(self.store.insert(payload.into()).await?)
    }

    /// Look up by the hex id clients see. An id that is not a valid
    /// ObjectId cannot name a record and reads as absent.
    pub async fn get_employee_by_id(&self, id: &str) -> Result<Option<Employee>, EmployeeError> {
        let Ok(id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        Ok(self.store.find_by_id(&id).await?)
    }

    /// Returns `true` if a record with `id` existed and is now gone.
    pub async fn delete_employee(&self, id: &str) -> Result<bool, EmployeeError> {
        let Ok(id) = ObjectId::parse_str(id) else {
            return Ok(false);
        };
        Ok(self.store.delete_by_id(&id).await?)
    }
}
