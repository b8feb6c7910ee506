use async_trait::async_trait;
use thiserror::Error;

use crate::models::todo::{Todo, UpdateTodo};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("MongoDB driver error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

/// Storage backend for todos. The HTTP handlers only talk to this trait,
/// so tests can swap the MongoDB client for an in-memory store.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Returns all todos in insertion order.
    async fn get_todos(&self) -> Result<Vec<Todo>, StoreError>;

    async fn create_todo(&self, todo: &Todo) -> Result<(), StoreError>;

    /// Applies the fields present in `update` and returns the updated
    /// todo, or `Ok(None)` if no todo has this id.
    async fn update_todo_by_id(
        &self,
        id: &str,
        update: &UpdateTodo,
    ) -> Result<Option<Todo>, StoreError>;

    /// Returns `Ok(false)` if no todo has this id.
    async fn delete_todo_by_id(&self, id: &str) -> Result<bool, StoreError>;
}
