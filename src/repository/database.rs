use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::models::todo::{Todo, UpdateTodo};
use crate::repository::store::{StoreError, TodoStore};

/// In-memory store backing the HTTP tests. Mirrors the MongoDB client's
/// behavior, including not-found reporting on update and delete.
#[derive(Default)]
pub struct Database {
    todos: Arc<Mutex<Vec<Todo>>>,
}

impl Database {
    pub fn new() -> Self {
        Database {
            todos: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl TodoStore for Database {
    async fn get_todos(&self) -> Result<Vec<Todo>, StoreError> {
        let todos = self.todos.lock().unwrap();
        Ok(todos.clone())
    }

    async fn create_todo(&self, todo: &Todo) -> Result<(), StoreError> {
        let mut todos = self.todos.lock().unwrap();
        todos.push(todo.clone());
        Ok(())
    }

    async fn update_todo_by_id(
        &self,
        id: &str,
        update: &UpdateTodo,
    ) -> Result<Option<Todo>, StoreError> {
        let mut todos = self.todos.lock().unwrap();
        let index = match todos.iter().position(|todo| todo.id == id) {
            Some(index) => index,
            None => return Ok(None),
        };
        update.apply_to(&mut todos[index]);
        Ok(Some(todos[index].clone()))
    }

    async fn delete_todo_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let mut todos = self.todos.lock().unwrap();
        let index = match todos.iter().position(|todo| todo.id == id) {
            Some(index) => index,
            None => return Ok(false),
        };
        todos.remove(index);
        Ok(true)
    }
}
