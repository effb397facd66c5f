use super::{EmployeeStore, StoreError};
use crate::models::{Employee, EmployeeDraft};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local store for development and tests. Records are kept in
/// insertion order and vanish with the process.
#[derive(Clone, Default)]
pub struct InMemoryEmployeeStore {
    employees: Arc<RwLock<Vec<Employee>>>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn find_all(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.employees.read().await.clone())
    }

    async fn insert(&self, draft: EmployeeDraft) -> Result<Employee, StoreError> {
        let employee = Employee::from_draft(ObjectId::new(), draft);
        self.employees.write().await.push(employee.clone());
        Ok(employee)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Employee>, StoreError> {
        let employees = self.employees.read().await;
        Ok(employees.iter().find(|e| &e.id == id).cloned())
    }

    async fn delete_by_id(&self, id: &ObjectId) -> Result<bool, StoreError> {
        let mut employees = self.employees.write().await;
        match employees.iter().position(|e| &e.id == id) {
            Some(index) => {
                employees.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
