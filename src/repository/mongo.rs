use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use crate::config::Config;
use crate::models::todo::{Todo, UpdateTodo};
use crate::repository::store::{StoreError, TodoStore};

const COLLECTION_NAME: &str = "todos";

#[derive(Clone, Debug)]
pub struct MongoDbClient {
    client: Client,
    db_name: String,
}

impl MongoDbClient {
    pub async fn new(config: &Config) -> Self {
        let client_options = ClientOptions::parse(&config.mongodb_uri).await.unwrap();
        let client = Client::with_options(client_options).expect("Failed to create MongoDB client");
        MongoDbClient {
            client,
            db_name: config.db_name.clone(),
        }
    }

    fn get_todo_collection(&self) -> Collection<Todo> {
        self.client
            .database(&self.db_name)
            .collection(COLLECTION_NAME)
    }
}

#[async_trait]
impl TodoStore for MongoDbClient {
    async fn get_todos(&self) -> Result<Vec<Todo>, StoreError> {
        let mut cursor = self.get_todo_collection().find(None, None).await?;
        let mut todos = Vec::new();
        while cursor.advance().await? {
            todos.push(cursor.deserialize_current()?);
        }
        Ok(todos)
    }

    async fn create_todo(&self, todo: &Todo) -> Result<(), StoreError> {
        self.get_todo_collection().insert_one(todo, None).await?;
        Ok(())
    }

    async fn update_todo_by_id(
        &self,
        id: &str,
        update: &UpdateTodo,
    ) -> Result<Option<Todo>, StoreError> {
        let collection = self.get_todo_collection();
        let filter = doc! { "id": id };
        if collection.find_one(filter.clone(), None).await?.is_none() {
            return Ok(None);
        }

        // MongoDB rejects an empty $set.
        let changes = Document::from(update);
        if !changes.is_empty() {
            collection
                .update_one(filter.clone(), doc! { "$set": changes }, None)
                .await?;
        }
        let updated = collection.find_one(filter, None).await?;
        Ok(updated)
    }

    async fn delete_todo_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let result = self
            .get_todo_collection()
            .delete_one(doc! { "id": id }, None)
            .await?;
        Ok(result.deleted_count > 0)
    }
}
