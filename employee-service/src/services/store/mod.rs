//! Persistence for employee records.
//!
//! Handlers never talk to a store directly; they go through
//! [`EmployeeService`](crate::services::EmployeeService), which holds an
//! `Arc<dyn EmployeeStore>` chosen at startup.

pub mod memory;
pub mod mongo;

use crate::models::{Employee, EmployeeDraft};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use thiserror::Error;

pub use memory::InMemoryEmployeeStore;
pub use mongo::MongoEmployeeStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Database(e) => AppError::from(e),
        }
    }
}

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Employee>, StoreError>;

    /// Persist a new record. The store assigns the id.
    async fn insert(&self, draft: EmployeeDraft) -> Result<Employee, StoreError>;

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Employee>, StoreError>;

    /// Remove the record in one atomic step. Returns whether one was removed.
    async fn delete_by_id(&self, id: &ObjectId) -> Result<bool, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}
