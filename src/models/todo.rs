use chrono::Utc;
use mongodb::bson::{self, Document};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categories offered to clients for grouping todos.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "general",
    "work",
    "personal",
    "shopping",
    "health",
    "learning",
];

/// A stored todo item. `id` and `created_at` are assigned by the server
/// and never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: String,
    pub due_date: Option<String>,
    pub completed: bool,
    pub created_at: String,
}

/// Client payload for creating a todo. Only `title` is required.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    pub description: Option<String>,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_priority")]
    pub priority: String,
    pub due_date: Option<String>,
}

fn default_category() -> String {
    "general".to_string()
}

fn default_priority() -> String {
    "medium".to_string()
}

/// Client payload for a partial update. Fields left out (or set to
/// `null`) keep their stored value.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

#[derive(Serialize)]
pub struct CategoryResponse {
    pub categories: Vec<String>,
}

impl From<CreateTodo> for Todo {
    fn from(value: CreateTodo) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: value.title,
            description: value.description.unwrap_or_default(),
            category: value.category,
            priority: value.priority,
            due_date: value.due_date,
            completed: false,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

impl From<&UpdateTodo> for Document {
    fn from(value: &UpdateTodo) -> Self {
        bson::to_document(value).expect("Failed to convert UpdateTodo to Document")
    }
}

impl UpdateTodo {
    /// Copies the fields present in this update onto `todo`.
    pub fn apply_to(&self, todo: &mut Todo) {
        if let Some(title) = &self.title {
            todo.title = title.clone();
        }
        if let Some(description) = &self.description {
            todo.description = description.clone();
        }
        if let Some(category) = &self.category {
            todo.category = category.clone();
        }
        if let Some(priority) = &self.priority {
            todo.priority = priority.clone();
        }
        if let Some(due_date) = &self.due_date {
            todo.due_date = Some(due_date.clone());
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}
