use super::{EmployeeStore, StoreError};
use crate::models::{Employee, EmployeeDraft};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

const EMPLOYEES_COLLECTION: &str = "employees";

#[derive(Clone)]
pub struct MongoEmployeeStore {
    client: MongoClient,
    db: Database,
}

impl MongoEmployeeStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub fn employees(&self) -> Collection<Employee> {
        self.db.collection(EMPLOYEES_COLLECTION)
    }
}

#[async_trait]
impl EmployeeStore for MongoEmployeeStore {
    async fn find_all(&self) -> Result<Vec<Employee>, StoreError> {
        let cursor = self.employees().find(doc! {}, None).await?;
        let employees: Vec<Employee> = cursor.try_collect().await?;
        Ok(employees)
    }

    async fn insert(&self, draft: EmployeeDraft) -> Result<Employee, StoreError> {
        let employee = Employee::from_draft(ObjectId::new(), draft);
        self.employees().insert_one(&employee, None).await?;
        Ok(employee)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Employee>, StoreError> {
        let employee = self.employees().find_one(doc! { "_id": id }, None).await?;
        Ok(employee)
    }

    async fn delete_by_id(&self, id: &ObjectId) -> Result<bool, StoreError> {
        let result = self.employees().delete_one(doc! { "_id": id }, None).await?;
        Ok(result.deleted_count > 0)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                StoreError::from(e)
            })?;
        Ok(())
    }
}
